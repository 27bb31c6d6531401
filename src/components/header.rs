//! Site Header
//!
//! Desktop: wordmark, title, anchor links and the "Ambiente Seguro" badge
//! Mobile: wordmark plus a toggle that opens the same links as a list

use dioxus::prelude::*;
use ouvidoria_ui::{Icon, IconButton, IconKind};

use crate::content::NAV_LINKS;

#[component]
fn SecureBadge() -> Element {
    rsx! {
        div { class: "secure-badge",
            Icon { kind: IconKind::Shield, size: 16 }
            span { "Ambiente Seguro" }
        }
    }
}

/// Sticky header with a collapsible mobile menu.
///
/// Choosing a link in the mobile menu closes it.
#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);

    let toggle_label = if menu_open() { "Fechar menu" } else { "Abrir menu" };
    let toggle_icon = if menu_open() { IconKind::X } else { IconKind::Menu };

    rsx! {
        header { class: "site-header",
            div { class: "container header-bar",
                div { class: "brand",
                    span { class: "wordmark", "aurora" }
                    div { class: "brand-text",
                        h1 { class: "brand-title", "Central de Reclamações" }
                        p { class: "brand-subtitle", "Resolução rápida e segura" }
                    }
                }

                nav { class: "desktop-nav",
                    for link in NAV_LINKS {
                        a { key: "{link.href}", class: "nav-link", href: "{link.href}", "{link.label}" }
                    }
                    SecureBadge {}
                }

                IconButton {
                    class: "menu-toggle".to_string(),
                    aria_label: toggle_label.to_string(),
                    onclick: move |_| {
                        let open = !menu_open();
                        tracing::debug!(open, "Mobile menu toggled");
                        menu_open.set(open);
                    },
                    Icon { kind: toggle_icon, size: 24 }
                }
            }

            if menu_open() {
                nav { class: "container mobile-menu",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.href}",
                            class: "nav-link",
                            href: "{link.href}",
                            onclick: move |_| menu_open.set(false),
                            "{link.label}"
                        }
                    }
                    SecureBadge {}
                }
            }
        }
    }
}
