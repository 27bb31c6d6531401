//! Toast Components
//!
//! Transient notifications stacked in the bottom-right corner. Removal is
//! driven by the caller; these components only render and report close
//! clicks.

use dioxus::prelude::*;

use super::{Icon, IconKind};

/// Properties for a single toast
#[derive(Clone, PartialEq, Props)]
pub struct ToastProps {
    pub title: String,
    pub description: String,
    /// Destructive styling for failures
    #[props(default = false)]
    pub is_error: bool,
    /// Called when the close button is pressed
    pub on_close: EventHandler<()>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let (class, icon) = if props.is_error {
        ("toast toast-error", IconKind::AlertCircle)
    } else {
        ("toast toast-success", IconKind::CheckCircle)
    };

    rsx! {
        div {
            class: "{class}",
            role: if props.is_error { "alert" } else { "status" },
            Icon { kind: icon, size: 20, class: "toast-icon".to_string() }
            div { class: "toast-body",
                p { class: "toast-title", "{props.title}" }
                p { class: "toast-description", "{props.description}" }
            }
            button {
                class: "toast-close",
                r#type: "button",
                "aria-label": "Fechar",
                onclick: move |_| props.on_close.call(()),
                Icon { kind: IconKind::X, size: 14 }
            }
        }
    }
}

/// Fixed container the toasts stack in
#[component]
pub fn ToastViewport(children: Element) -> Element {
    rsx! {
        div { class: "toast-viewport", "aria-live": "polite", {children} }
    }
}
