//! Central de Reclamações Core Library
//!
//! Everything the complaint intake form does that is not rendering: the
//! draft, its fields and categories, input masks, validators, the three-step
//! wizard and the submission seam.
//!
//! ## Overview
//!
//! A complaint is collected in three steps (personal data, bank data,
//! description). The wizard only moves forward when the current step's
//! fields validate, and the last step hands the draft to a [`Submitter`].
//! Until a backend exists, [`SimulatedSubmitter`] waits a fixed delay and
//! returns a protocol number.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ouvidoria_core::{ComplaintWizard, Field, SimulatedSubmitter};
//!
//! let mut wizard = ComplaintWizard::new();
//! wizard.set_field(Field::Name, "Ana Silva");
//! wizard.set_field(Field::TaxId, "12345678909"); // stored as 123.456.789-09
//! wizard.set_field(Field::Email, "ana@ex.com");
//! wizard.set_field(Field::Phone, "11912345678"); // stored as (11) 91234-5678
//! assert!(wizard.advance());
//!
//! // ... bank data, description ...
//!
//! let submitter = SimulatedSubmitter::new(config.submit_delay(), tokio::time::sleep);
//! wizard.submit(&submitter, &|n| println!("{}: {}", n.title, n.description)).await;
//! ```

pub mod category;
pub mod config;
pub mod draft;
pub mod error;
pub mod field;
pub mod format;
pub mod notification;
pub mod submission;
pub mod validation;
pub mod wizard;

// Re-exports
pub use category::ComplaintCategory;
pub use config::FormConfig;
pub use draft::ComplaintDraft;
pub use error::{IntakeError, IntakeResult, SubmitError};
pub use field::{Field, Step};
pub use format::{apply_mask, format_phone, format_tax_id, PHONE_MAX_LEN, TAX_ID_MAX_LEN};
pub use notification::{Notification, NotificationKind, Notifier};
pub use submission::{Protocol, Receipt, SimulatedSubmitter, Submitter};
pub use validation::{validate_field, FieldErrors};
pub use wizard::ComplaintWizard;
