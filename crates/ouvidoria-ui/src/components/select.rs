//! Select Component
//!
//! Native dropdown with a disabled placeholder option, labelled the same
//! way as text fields.

use dioxus::prelude::*;

use super::input::{control_class, FieldLabel};
use super::FieldError;

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub id: String,
    pub label: String,
    /// Option labels; each label is also its value
    pub options: Vec<String>,
    /// Currently selected label, empty when nothing is chosen
    pub value: String,
    /// Called with the chosen label
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default)]
    pub error: Option<String>,
    /// Text of the empty leading option
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = true)]
    pub required: bool,
}

/// Labelled dropdown
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Select {
///         id: "complaintType".to_string(),
///         label: "Tipo de Reclamação".to_string(),
///         options: ComplaintCategory::labels().map(str::to_string).collect(),
///         value: wizard.read().value(Field::Category).to_string(),
///         onchange: move |v| { wizard.write().set_field(Field::Category, v); },
///     }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = control_class("select-field", props.error.is_some());
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            FieldLabel { id: props.id.clone(), label: props.label.clone(), required: props.required }
            select {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                value: "{props.value}",
                "aria-invalid": props.error.is_some(),
                onchange: move |e| props.onchange.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
                option {
                    value: "",
                    disabled: true,
                    selected: props.value.is_empty(),
                    "{placeholder}"
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
            if let Some(error) = &props.error {
                FieldError { message: error.clone() }
            }
        }
    }
}
