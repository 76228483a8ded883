//! Fun-fact modal state machine.
//!
//! `FactSession` owns everything the topic dialog shows: which topic is
//! selected, whether a request is in flight, and the text to display. It is
//! synchronous and does no I/O; callers issue the request themselves with the
//! `FactRequest` returned by [`FactSession::begin_generate`] and feed the
//! result back through [`FactSession::complete`].

use crate::model::Topic;

/// Instruction sent with every fun-fact request.
pub const FACT_SYSTEM_INSTRUCTION: &str = "You are a friendly and enthusiastic educator for children aged 6-10. Your goal is to provide a single, amazing, and easy-to-understand fun fact.";

/// Shown when the request succeeded but produced no usable text.
pub const EMPTY_FACT_MESSAGE: &str = "I couldn't think of a fact right now. Maybe try again!";

/// Shown for any transport, status or decoding failure.
pub const FAILED_FACT_MESSAGE: &str =
    "Oops! Something went wrong. Please check your connection and try again.";

/// Per-request query for a topic.
#[must_use]
pub fn fact_query(topic: &Topic) -> String {
    format!("Tell me a fun fact about {}.", topic.title())
}

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactPhase {
    Closed,
    OpenIdle,
    OpenLoading,
    OpenResult,
}

/// Result of one fun-fact request, already stripped of error detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactOutcome {
    Fact(String),
    Empty,
    Failed,
}

impl FactOutcome {
    /// Text to display for this outcome.
    #[must_use]
    pub fn into_content(self) -> String {
        match self {
            Self::Fact(text) if !text.trim().is_empty() => text,
            Self::Fact(_) | Self::Empty => EMPTY_FACT_MESSAGE.to_string(),
            Self::Failed => FAILED_FACT_MESSAGE.to_string(),
        }
    }
}

/// Identifies one issued request. Only the latest ticket of the current
/// open cycle is accepted by [`FactSession::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FactTicket(u64);

impl FactTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What the caller needs to perform a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactRequest {
    pub ticket: FactTicket,
    pub topic: Topic,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactSession {
    selected: Option<Topic>,
    content: String,
    loading: bool,
    issued: u64,
    pending: Option<FactTicket>,
}

impl FactSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> FactPhase {
        if self.selected.is_none() {
            FactPhase::Closed
        } else if self.loading {
            FactPhase::OpenLoading
        } else if self.content.is_empty() {
            FactPhase::OpenIdle
        } else {
            FactPhase::OpenResult
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected.as_ref()
    }

    /// The generate control is enabled only while open and idle/showing a result.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.is_open() && !self.loading
    }

    /// Open the dialog for `topic`, replacing any previous selection.
    ///
    /// Any request still in flight for the previous selection is orphaned.
    pub fn select(&mut self, topic: Topic) {
        self.selected = Some(topic);
        self.reset();
    }

    /// Close the dialog and forget the selection.
    pub fn close(&mut self) {
        self.selected = None;
        self.reset();
    }

    /// Move to loading and hand out a ticket for exactly one request.
    ///
    /// Returns `None` when closed or when a request is already in flight.
    pub fn begin_generate(&mut self) -> Option<FactRequest> {
        if !self.can_generate() {
            return None;
        }
        let topic = self.selected.clone()?;
        self.issued += 1;
        let ticket = FactTicket(self.issued);
        self.pending = Some(ticket);
        self.content.clear();
        self.loading = true;
        Some(FactRequest { ticket, topic })
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) if the ticket is stale, e.g. the
    /// dialog was closed or another topic selected in the meantime.
    pub fn complete(&mut self, ticket: FactTicket, outcome: FactOutcome) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.loading = false;
        self.content = outcome.into_content();
        true
    }

    fn reset(&mut self) {
        self.content.clear();
        self.loading = false;
        self.pending = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
