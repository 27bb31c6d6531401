#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

fn main() {
    init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Central de Reclamações");

    launch();
}

/// Desktop builds log through `tracing-subscriber`, filtered by `RUST_LOG`.
#[cfg(feature = "desktop")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Browser builds log to the devtools console.
#[cfg(not(feature = "desktop"))]
fn init_logging() {
    // Only fails when a logger is already installed.
    let _ = dioxus::logger::init(tracing::Level::INFO);
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Central de Reclamações")
            .with_inner_size(LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(app::App);
}
