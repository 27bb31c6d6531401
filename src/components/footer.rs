//! Site footer.

use chrono::Datelike;
use dioxus::prelude::*;
use ouvidoria_ui::Icon;

use crate::content::{
    copyright, NavLink, CONTACTS, FOOTER_COMPLAINT_TYPES, FOOTER_QUICK_LINKS, LEGAL_LINES,
    LEGAL_LINKS, SOCIALS,
};

/// Anchors stay plain `<a>`; site paths go through the router so unknown
/// pages land on the not-found route.
#[component]
fn FooterLink(link: NavLink, class: &'static str) -> Element {
    if link.href.starts_with('/') {
        rsx! {
            Link { class: class.to_string(), to: link.href.to_string(), "{link.label}" }
        }
    } else {
        rsx! {
            a { class: "{class}", href: "{link.href}", "{link.label}" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let copyright_line = copyright(chrono::Local::now().year());

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        span { class: "wordmark wordmark-inverted", "aurora" }
                        h3 { class: "footer-title", "Central de Reclamações" }
                        p { class: "footer-text",
                            "Comprometidos em oferecer a melhor experiência bancária através da escuta ativa "
                            "e resolução eficiente das suas demandas."
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Links Úteis" }
                        ul { class: "footer-list",
                            for link in FOOTER_QUICK_LINKS {
                                li { key: "{link.href}",
                                    FooterLink { link, class: "footer-link" }
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Tipos de Reclamação" }
                        ul { class: "footer-list",
                            for kind in FOOTER_COMPLAINT_TYPES {
                                li { key: "{kind}", span { class: "footer-text", "{kind}" } }
                            }
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Contato" }
                        div { class: "contact-list",
                            for contact in CONTACTS {
                                div { key: "{contact.text}", class: "contact-item",
                                    Icon { kind: contact.icon, size: 16, class: "contact-icon".to_string() }
                                    span { class: "footer-text",
                                        for (i, line) in contact.text.lines().enumerate() {
                                            if i > 0 {
                                                br {}
                                            }
                                            "{line}"
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "socials",
                            h5 { "Redes Sociais" }
                            div { class: "social-row",
                                for social in SOCIALS {
                                    a {
                                        key: "{social.label}",
                                        class: "social-link",
                                        href: "{social.href}",
                                        "aria-label": "{social.label}",
                                        Icon { kind: social.icon, size: 16 }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    div { class: "footer-bottom-row",
                        div { class: "copyright", "{copyright_line}" }
                        div { class: "legal-links",
                            for link in LEGAL_LINKS {
                                FooterLink { key: "{link.href}", link, class: "legal-link" }
                            }
                        }
                    }
                    div { class: "legal-text",
                        for line in LEGAL_LINES {
                            p { key: "{line}", "{line}" }
                        }
                    }
                }
            }
        }
    }
}
