use dioxus::prelude::*;
use learnify_core::model::Topic;

use crate::vm::TopicCardVm;

#[component]
pub fn TopicGrid(topics: Vec<Topic>, on_select: Callback<Topic>) -> Element {
    rsx! {
        section { class: "topics",
            h2 { class: "section-title", "Featured Topics" }
            div { class: "topics__grid",
                {topics.into_iter().map(|topic| {
                    let card = TopicCardVm::from(&topic);
                    let key = card.title.clone();
                    rsx! {
                        TopicCard {
                            key: "{key}",
                            card,
                            on_select: move |()| on_select.call(topic.clone()),
                        }
                    }
                })}
            }
        }
    }
}

#[component]
pub fn TopicCard(card: TopicCardVm, on_select: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "topic-card",
            r#type: "button",
            onclick: move |_| on_select.call(()),
            div { class: "{card.badge_class}", dangerous_inner_html: "{card.icon_svg}" }
            h3 { class: "topic-card__title", "{card.title}" }
            p { class: "topic-card__description", "{card.description}" }
        }
    }
}
