use dioxus::prelude::*;

use crate::theme::{root_class, use_color_mode};
use crate::views::DashboardView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Learnify" }

        ThemedShell {
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                DashboardView {}
            }
        }
    }
}

/// Root container carrying the applied color mode as a CSS class.
#[component]
pub fn ThemedShell(children: Element) -> Element {
    let mode = use_color_mode();
    let mode = mode();
    let class = root_class(mode);
    let mode_name = mode.as_str();

    rsx! {
        div { class: "{class}", "data-theme": "{mode_name}",
            {children}
        }
    }
}
