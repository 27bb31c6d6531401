//! Button Components
//!
//! Button styles used across the site:
//! - Primary: red gradient, main form actions
//! - Outline: bordered, secondary actions ("Voltar")
//! - Hero: white on the hero gradient
//! - HeroOutline: white border on the hero gradient
//! - Ghost: no chrome, icon-only toggles

use dioxus::prelude::*;

use super::join_classes;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action - brand gradient, lifts on hover
    #[default]
    Primary,
    /// Secondary action - transparent with border
    Outline,
    /// Large white call-to-action for dark backgrounds
    Hero,
    /// Large outlined call-to-action for dark backgrounds
    HeroOutline,
    /// No border or background
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Hero => "btn-hero",
            ButtonVariant::HeroOutline => "btn-hero-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| wizard.write().retreat(),
///         "Voltar"
///     }
///
///     Button {
///         button_type: "submit".to_string(),
///         disabled: submitting,
///         "Enviar Reclamação"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Link styled as a button, for in-page anchors like `#formulario`.
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// Target, usually an in-page anchor
    pub href: String,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        a { class: "{full_class}", href: "{props.href}", {props.children} }
    }
}

/// Icon button for compact actions (menu toggle, close, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Hero.class(), "btn-hero");
        assert_eq!(ButtonVariant::HeroOutline.class(), "btn-hero-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
