use dioxus::prelude::*;
use ouvidoria_ui::{ButtonVariant, LinkButton};

/// Catch-all for paths the site does not serve yet (FAQ, terms, ...).
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook({
        let path = path.clone();
        move || tracing::warn!(%path, "Route not found")
    });

    rsx! {
        main { class: "not-found",
            div { class: "not-found-card",
                h1 { "404" }
                p { "Página não encontrada: " code { "{path}" } }
                LinkButton { variant: ButtonVariant::Primary, href: "/".to_string(), "Voltar ao início" }
            }
        }
    }
}
