//! Input Field Components
//!
//! Labelled text inputs and textareas for the complaint form.
//! Features:
//! - Red asterisk on required labels
//! - Destructive border and inline message when a field has an error
//! - Optional character counter under textareas

use dioxus::prelude::*;

use super::{join_classes, Icon, IconKind};

/// Inline error message under a field
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        p { class: "field-error", role: "alert",
            Icon { kind: IconKind::AlertCircle, size: 12 }
            span { "{message}" }
        }
    }
}

/// Label with the required marker
#[component]
pub(super) fn FieldLabel(id: String, label: String, required: bool) -> Element {
    rsx! {
        label { class: "input-label", r#for: "{id}",
            "{label}"
            if required {
                span { class: "required-mark", " *" }
            }
        }
    }
}

pub(super) fn control_class(base: &str, has_error: bool) -> String {
    join_classes(base, has_error.then_some("has-error"))
}

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Element id, also used as the label target
    pub id: String,
    pub label: String,
    /// Current value
    pub value: String,
    /// Called with the raw text on every keystroke
    pub oninput: EventHandler<String>,
    /// Called when focus leaves the field
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Error message to show, if any
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, tel)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Rendered as `maxlength`; no cap when unset
    #[props(default)]
    pub max_length: Option<usize>,
    #[props(default = true)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line labelled input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         id: "cpf".to_string(),
///         label: "CPF".to_string(),
///         value: wizard.read().value(Field::TaxId).to_string(),
///         oninput: move |v| { wizard.write().set_field(Field::TaxId, v); },
///         onblur: move |_| wizard.write().blur(Field::TaxId),
///         error: wizard.read().error(Field::TaxId).map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let class = control_class("input-field", props.error.is_some());

    rsx! {
        div { class: "form-field",
            FieldLabel { id: props.id.clone(), label: props.label.clone(), required: props.required }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                maxlength: props.max_length.map(|n| n.to_string()),
                disabled: props.disabled,
                "aria-invalid": props.error.is_some(),
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(error) = &props.error {
                FieldError { message: error.clone() }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 6)]
    pub rows: u32,
    /// Soft limit shown as `n/limit`; no counter when unset
    #[props(default)]
    pub counter_limit: Option<usize>,
    #[props(default = true)]
    pub required: bool,
}

/// Multi-line labelled input with an optional counter.
///
/// The counter is informational: typing past the limit is allowed.
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = control_class("textarea-field", props.error.is_some());
    let count = props.value.chars().count();

    rsx! {
        div { class: "form-field",
            FieldLabel { id: props.id.clone(), label: props.label.clone(), required: props.required }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                "aria-invalid": props.error.is_some(),
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            div { class: "field-footer",
                if let Some(error) = &props.error {
                    FieldError { message: error.clone() }
                } else {
                    span {}
                }
                if let Some(limit) = props.counter_limit {
                    span { class: "char-counter", "Caracteres: {count}/{limit}" }
                }
            }
        }
    }
}
