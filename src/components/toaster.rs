use dioxus::prelude::*;
use ouvidoria_ui::{Toast, ToastViewport};

use crate::context::use_toasts;

/// Renders the shared toast queue.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();

    rsx! {
        ToastViewport {
            for entry in toasts.entries() {
                Toast {
                    key: "{entry.id}",
                    title: entry.notification.title.clone(),
                    description: entry.notification.description.clone(),
                    is_error: entry.notification.is_error(),
                    on_close: move |_| toasts.dismiss(entry.id),
                }
            }
        }
    }
}
