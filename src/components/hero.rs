//! Hero banner: headline, calls to action and three headline stats.

use dioxus::prelude::*;
use ouvidoria_ui::{ButtonVariant, Icon, IconKind, LinkButton};

use crate::content::{anchor, HERO_STATS};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: anchor::HOME, class: "hero",
            div { class: "container hero-inner",
                h1 { class: "hero-title",
                    "Sua Voz é Nossa"
                    span { class: "hero-title-accent", "Prioridade" }
                }
                p { class: "hero-subtitle",
                    "Resolução rápida, segura e transparente para todas as suas questões bancárias. "
                    "Estamos aqui para ouvir e solucionar."
                }

                div { class: "hero-actions",
                    LinkButton { variant: ButtonVariant::Hero, href: "#formulario".to_string(),
                        Icon { kind: IconKind::MessageSquare, size: 20 }
                        "Fazer Reclamação"
                    }
                    LinkButton { variant: ButtonVariant::HeroOutline, href: "#acompanhar".to_string(),
                        "Acompanhar Status"
                    }
                }

                div { class: "hero-stats",
                    for stat in HERO_STATS {
                        div { key: "{stat.label}", class: "hero-stat",
                            div { class: "hero-stat-icon",
                                Icon { kind: stat.icon, size: 24 }
                            }
                            h3 { class: "hero-stat-value", "{stat.value}" }
                            p { class: "hero-stat-label", "{stat.label}" }
                        }
                    }
                }
            }

            div { class: "hero-wave",
                svg {
                    view_box: "0 0 1000 100",
                    preserve_aspect_ratio: "none",
                    fill: "currentColor",
                    xmlns: "http://www.w3.org/2000/svg",
                    path { d: "M0,60 C150,100 350,0 500,50 C650,100 850,0 1000,40 L1000,100 L0,100 Z" }
                }
            }
        }
    }
}
