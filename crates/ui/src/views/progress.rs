use dioxus::prelude::*;
use learnify_core::model::ProgressItem;

use crate::vm::map_progress_bars;

#[component]
pub fn ProgressPanel(items: Vec<ProgressItem>) -> Element {
    let bars = map_progress_bars(&items);

    rsx! {
        section { class: "panel progress",
            h2 { class: "section-title", "Your Progress" }
            div { class: "progress__list",
                for bar in bars {
                    div { key: "{bar.subject}", class: "progress__item",
                        div { class: "progress__labels",
                            span { class: "progress__subject", "{bar.subject}" }
                            span { class: "progress__value", "{bar.percent_label}" }
                        }
                        div { class: "progress__track",
                            div { class: "{bar.fill_class}", style: "{bar.fill_style}" }
                        }
                    }
                }
            }
        }
    }
}
