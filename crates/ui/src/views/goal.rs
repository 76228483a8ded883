use dioxus::prelude::*;
use learnify_core::model::{GoalRamp, WeeklyGoal};

use crate::icons::{TRENDING_UP_ICON, TROPHY_ICON};
use crate::vm::{GoalGaugeVm, gauge_svg};

/// Weekly goal card. The gauge and its counter ramp from 0 to the goal
/// percentage once, when the card mounts.
#[component]
pub fn WeeklyGoalCard(goal: WeeklyGoal, trend_percent: i32) -> Element {
    let vm = GoalGaugeVm::new(goal, trend_percent);
    let target = vm.percentage;
    let displayed = use_signal(|| 0u8);

    use_future(move || {
        let mut displayed = displayed;
        async move {
            for value in GoalRamp::new(target) {
                displayed.set(value);
                if value == target {
                    break;
                }
                tokio::time::sleep(GoalRamp::frame_interval()).await;
            }
        }
    });

    let shown = displayed();
    let gauge = gauge_svg(shown);

    rsx! {
        section { class: "panel goal",
            div { class: "goal__header",
                div { class: "goal__title-row",
                    h3 { class: "goal__title", "Weekly Goal Progress" }
                    if vm.show_trophy {
                        span { class: "trophy animate-trophy-pop", dangerous_inner_html: TROPHY_ICON }
                    }
                }
                p { class: "goal__subtitle", "You're doing great, keep it up!" }
            }
            div { class: "goal__gauge",
                div { class: "goal__chart", dangerous_inner_html: "{gauge}" }
                div { class: "goal__readout",
                    span { class: "goal__percent", "{shown}%" }
                    span { class: "goal__cheer", "Way to Go!" }
                }
            }
            div { class: "goal__footer",
                div { class: "goal__trend",
                    "{vm.trend_label}"
                    if vm.trend_up {
                        span { class: "goal__trend-icon", dangerous_inner_html: TRENDING_UP_ICON }
                    }
                }
                div { class: "goal__studied", "{vm.studied_label}" }
            }
        }
    }
}
