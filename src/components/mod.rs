//! Page sections for the complaint site.
//!
//! Layout-only sections read their copy from [`crate::content`]; the
//! complaint form is the one stateful section.

mod complaint_form;
mod credibility;
mod footer;
mod header;
mod hero;
mod scroll_to_top;
mod toaster;

pub use complaint_form::ComplaintForm;
pub use credibility::Credibility;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use scroll_to_top::ScrollToTop;
pub use toaster::Toaster;
