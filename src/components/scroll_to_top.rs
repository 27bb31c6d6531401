use dioxus::prelude::*;
use ouvidoria_ui::{Icon, IconKind};

use crate::content::anchor;

/// Floating "back to top" control, bottom-right.
#[component]
pub fn ScrollToTop() -> Element {
    rsx! {
        a {
            class: "scroll-to-top",
            href: format!("#{}", anchor::HOME),
            "aria-label": "Voltar ao topo",
            Icon { kind: IconKind::ArrowUp, size: 20 }
        }
    }
}
