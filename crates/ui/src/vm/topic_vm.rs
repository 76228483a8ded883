use learnify_core::model::Topic;

use crate::icons::topic_icon_svg;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub title: String,
    pub description: String,
    pub icon_svg: &'static str,
    pub badge_class: String,
}

impl From<&Topic> for TopicCardVm {
    fn from(topic: &Topic) -> Self {
        Self {
            title: topic.title().to_string(),
            description: topic.description().to_string(),
            icon_svg: topic_icon_svg(topic.icon()),
            badge_class: badge_class(topic),
        }
    }
}

/// Classes for the round icon badge: layout plus the topic's light and dark tokens.
fn badge_class(topic: &Topic) -> String {
    format!("topic-badge {} {}", topic.color(), topic.dark_color())
}
