use dioxus::prelude::*;
use ouvidoria_core::FormConfig;

use crate::components::Toaster;
use crate::context::ToastQueue;
use crate::pages::{Landing, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - the single landing page; sections are reached by `#anchor`
/// - anything else - "page not found" with a link home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the form config, the toast queue and routing.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(FormConfig::default);
    use_context_provider(|| ToastQueue::new(config.toast_duration()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        Toaster {}
    }
}
