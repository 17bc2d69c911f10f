// ui/src/components/toast.rs
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;

/// Renders the current toast at the bottom of the screen and dismisses it
/// once the configured duration has passed.
#[component]
pub fn ToastHost() -> Element {
    let duration = use_context::<AppState>().prefs.toast_duration();
    let mut toast = use_context::<AppStateMut>().toast;

    use_effect(move || {
        let Some(shown_id) = toast.read().as_ref().map(|t| t.id) else {
            return;
        };
        spawn(async move {
            compat::sleep(duration).await;
            // a newer toast may have replaced this one meanwhile
            if toast.peek().as_ref().map(|t| t.id) == Some(shown_id) {
                toast.set(None);
            }
        });
    });

    let current = toast();

    rsx! {
        if let Some(current) = current {
            div {
                class: "toast",
                role: "status",
                "aria-live": "polite",
                style: "background-color: {current.notification.background_color}; color: {current.notification.text_color};",
                onclick: move |_| toast.set(None),
                "{current.notification.message}"
            }
        }
    }
}
