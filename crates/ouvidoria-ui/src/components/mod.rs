//! Reusable UI components
//!
//! Every component renders plain elements with class names from the global
//! stylesheet; no inline colours except icon strokes.

mod button;
mod card;
mod icon;
mod input;
mod progress;
mod select;
mod toast;

pub use button::*;
pub use card::*;
pub use icon::*;
pub use input::*;
pub use progress::*;
pub use select::*;
pub use toast::*;

/// Join a base class with optional extra classes.
pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
