//! Defines the mutable, reactive state shared across the UI.

use dioxus::prelude::*;
use rates::notification::Notification;

/// A notification currently on screen.
///
/// The id distinguishes repeated identical messages, so a dismiss timer only
/// ever removes the toast it was started for.
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The converter's own input and result are not here: they belong to the
/// converter screen alone.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The toast being shown, if any.
    pub toast: Signal<Option<Toast>>,
    next_toast_id: Signal<u64>,
}

impl AppStateMut {
    pub fn new(toast: Signal<Option<Toast>>, next_toast_id: Signal<u64>) -> Self {
        Self {
            toast,
            next_toast_id,
        }
    }

    /// Replaces whatever toast is showing with `notification`.
    pub fn show_toast(&mut self, notification: Notification) {
        let id = *self.next_toast_id.peek();
        self.next_toast_id.set(id.wrapping_add(1));
        self.toast.set(Some(Toast { id, notification }));
    }
}
