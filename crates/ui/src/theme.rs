use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use learnify_core::model::ColorMode;

use crate::context::AppContext;

/// Follow the host color scheme for as long as the calling component is
/// mounted. The subscription is cancelled when the component unmounts.
pub fn use_color_mode() -> Signal<ColorMode> {
    let ctx = use_context::<AppContext>();
    let theme = ctx.theme();

    let subscription = use_hook({
        let theme = theme.clone();
        let preference = ctx.preference();
        move || Rc::new(RefCell::new(Some(theme.attach(preference.as_ref()))))
    });
    let mode = use_signal({
        let theme = theme.clone();
        move || theme.current()
    });

    use_future(move || {
        let mut mode = mode;
        let mut applied = theme.observe();
        async move {
            loop {
                let next = *applied.borrow_and_update();
                if *mode.peek() != next {
                    mode.set(next);
                }
                if applied.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    use_drop(move || {
        if let Some(mut subscription) = subscription.borrow_mut().take() {
            subscription.cancel();
        }
    });

    mode
}

#[must_use]
pub fn root_class(mode: ColorMode) -> &'static str {
    if mode.is_dark() { "app-root dark" } else { "app-root" }
}
