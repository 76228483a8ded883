use learnify_core::{FactPhase, FactSession};

use crate::vm::TopicCardVm;

pub const GENERATE_LABEL: &str = "Get a Fun Fact!";
pub const GENERATING_LABEL: &str = "Thinking...";

/// What the topic dialog shows for the current session, if it is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactModalVm {
    pub topic: TopicCardVm,
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub content: Option<String>,
}

impl FactModalVm {
    #[must_use]
    pub fn from_session(session: &FactSession) -> Option<Self> {
        let topic = session.selected_topic()?;
        let loading = session.phase() == FactPhase::OpenLoading;
        let content = (!session.content().is_empty()).then(|| session.content().to_string());
        Some(Self {
            topic: TopicCardVm::from(topic),
            button_label: if loading { GENERATING_LABEL } else { GENERATE_LABEL },
            button_disabled: !session.can_generate(),
            content,
        })
    }
}
