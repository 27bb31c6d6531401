//! Trust section: security features, service stats, the handling
//! timeline and certification badges.
//!
//! The section carries the `#ajuda` anchor and the timeline carries
//! `#acompanhar`, so every header link lands somewhere.

use dioxus::prelude::*;
use ouvidoria_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Icon};

use crate::content::{anchor, CREDIBILITY_STATS, PROCESS_STEPS, SECURITY_FEATURES, TRUST_BADGES};

#[component]
pub fn Credibility() -> Element {
    let last = PROCESS_STEPS.len() - 1;

    rsx! {
        section { id: anchor::HELP, class: "credibility",
            div { class: "container",
                div { class: "section-heading",
                    h2 { "Confiança e Segurança" }
                    p {
                        "Utilizamos os mais altos padrões de segurança e qualidade para garantir a melhor experiência "
                        "na resolução das suas demandas bancárias."
                    }
                }

                div { class: "feature-grid",
                    for feature in SECURITY_FEATURES {
                        Card { key: "{feature.title}", class: "feature-card".to_string(),
                            CardHeader {
                                div { class: "icon-bubble",
                                    Icon { kind: feature.icon, size: 24 }
                                }
                                CardTitle { "{feature.title}" }
                            }
                            CardContent {
                                CardDescription { "{feature.description}" }
                            }
                        }
                    }
                }

                div { class: "stats-panel",
                    for stat in CREDIBILITY_STATS {
                        div { key: "{stat.label}", class: "stat",
                            div { class: "icon-bubble icon-bubble-soft",
                                Icon { kind: stat.icon, size: 24 }
                            }
                            div { class: "stat-value", "{stat.value}" }
                            div { class: "stat-label", "{stat.label}" }
                            div { class: "stat-sublabel", "{stat.sublabel}" }
                        }
                    }
                }

                div { id: anchor::TRACK, class: "process",
                    h3 { class: "process-title", "Como Funciona o Processo" }
                    div { class: "process-grid",
                        for (i, step) in PROCESS_STEPS.iter().enumerate() {
                            div { key: "{step.number}", class: "process-item",
                                Card { class: "process-card".to_string(),
                                    CardHeader {
                                        div { class: "process-head",
                                            div { class: "process-number", "{step.number}" }
                                            div {
                                                CardTitle { "{step.title}" }
                                                div { class: "process-time", "{step.time}" }
                                            }
                                        }
                                    }
                                    CardContent {
                                        CardDescription { "{step.description}" }
                                    }
                                }
                                if i < last {
                                    div { class: "process-connector" }
                                }
                            }
                        }
                    }
                }

                div { class: "badges",
                    h4 { "Certificações e Parcerias" }
                    div { class: "badge-row",
                        for badge in TRUST_BADGES {
                            div { key: "{badge}", class: "trust-badge", "{badge}" }
                        }
                    }
                }
            }
        }
    }
}
