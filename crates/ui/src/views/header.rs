use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavLink {
    Home,
    Topics,
    Quizzes,
}

impl NavLink {
    const ALL: [Self; 3] = [Self::Home, Self::Topics, Self::Quizzes];

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Topics => "Topics",
            Self::Quizzes => "Quizzes",
        }
    }
}

/// Top bar with the product mark, section links and the learner's avatar.
///
/// The links only track which one is highlighted; there is a single page.
#[component]
pub fn Header(avatar_initials: String, learner_name: String) -> Element {
    let mut active = use_signal(|| NavLink::Home);

    rsx! {
        header { class: "app-header",
            div { class: "app-header__inner",
                div { class: "brand",
                    span { class: "brand__mark", "L" }
                    span { class: "brand__name", "Learnify" }
                }
                nav { class: "nav",
                    for link in NavLink::ALL {
                        a {
                            key: "{link.label()}",
                            href: "#",
                            class: if active() == link { "nav__link nav__link--active" } else { "nav__link" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                active.set(link);
                            },
                            "{link.label()}"
                        }
                    }
                }
                div {
                    class: "avatar",
                    title: "{learner_name}",
                    "aria-label": "User Avatar",
                    "{avatar_initials}"
                }
            }
        }
    }
}
