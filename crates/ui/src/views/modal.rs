use dioxus::prelude::*;

use crate::vm::FactModalVm;

/// Dialog for the selected topic. Clicking the backdrop, the close button or
/// pressing Escape closes it; clicks inside the dialog do not.
#[component]
pub fn TopicModal(modal: FactModalVm, on_close: Callback<()>, on_generate: Callback<()>) -> Element {
    let topic = &modal.topic;

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            // Focus the backdrop so key presses reach it before anything inside is focused.
            onmounted: move |evt: MountedEvent| async move {
                if let Err(err) = evt.set_focus(true).await {
                    tracing::debug!(error = ?err, "could not focus topic dialog");
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if dismisses_modal(&evt.key()) {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{topic.title}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "modal__close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                div { class: "modal__heading",
                    div { class: "{topic.badge_class}", dangerous_inner_html: "{topic.icon_svg}" }
                    div {
                        h2 { class: "modal__title", "{topic.title}" }
                        p { class: "modal__description", "{topic.description}" }
                    }
                }
                div { class: "modal__actions",
                    button {
                        class: "fact-button",
                        r#type: "button",
                        disabled: modal.button_disabled,
                        onclick: move |_| on_generate.call(()),
                        "✨ {modal.button_label}"
                    }
                }
                if let Some(content) = modal.content.as_ref() {
                    div { class: "modal__result",
                        p { "{content}" }
                    }
                }
            }
        }
    }
}

fn dismisses_modal(key: &Key) -> bool {
    *key == Key::Escape
}
