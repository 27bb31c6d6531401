//! User-visible notifications.
//!
//! The core only produces [`Notification`] values; how they are shown
//! (toast, banner, log line) is up to the [`Notifier`] the caller passes in.

use serde::{Deserialize, Serialize};

use crate::submission::Receipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

/// A transient message shown after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }

    /// Confirmation shown once a complaint has been accepted.
    pub fn submitted(receipt: &Receipt) -> Self {
        Self::success(
            "Reclamação enviada com sucesso!",
            format!(
                "Você receberá um e-mail de confirmação em breve. Protocolo: {}",
                receipt.protocol
            ),
        )
    }

    pub fn submission_failed() -> Self {
        Self::error(
            "Erro ao enviar reclamação",
            "Tente novamente em alguns instantes.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::submission::Protocol;

    #[test]
    fn submitted_mentions_protocol() {
        let receipt = Receipt::new(Protocol::new(2026, 42));
        let note = Notification::submitted(&receipt);
        assert!(!note.is_error());
        assert_eq!(note.title, "Reclamação enviada com sucesso!");
        assert!(note.description.ends_with("Protocolo: #20260042"));
    }

    #[test]
    fn failure_is_error() {
        let note = Notification::submission_failed();
        assert!(note.is_error());
        assert_eq!(note.description, "Tente novamente em alguns instantes.");
    }

    #[test]
    fn closures_are_notifiers() {
        let seen = RefCell::new(Vec::new());
        let notifier = |n: Notification| seen.borrow_mut().push(n);
        notifier.notify(Notification::success("a", "b"));
        assert_eq!(seen.borrow().len(), 1);
    }
}
