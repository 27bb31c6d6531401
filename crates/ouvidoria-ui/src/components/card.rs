//! Card Components
//!
//! White panel with a soft shadow. The complaint form sits in one; the
//! credibility section uses them for feature tiles.

use dioxus::prelude::*;

use super::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = join_classes("card", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}
