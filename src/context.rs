//! App-wide context for the complaint site.
//!
//! Two values are provided by [`crate::app::App`]:
//! - [`FormConfig`], read once by the complaint form
//! - [`ToastQueue`], the notification channel every component can post to
//!
//! ## Usage
//!
//! ```ignore
//! let toasts = use_toasts();
//! toasts.notify(Notification::success("Pronto", "..."));
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use ouvidoria_core::{FormConfig, Notification, Notifier};

/// A queued notification with a stable id for dismissal.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notification: Notification,
}

/// Visible toasts plus the id counter.
///
/// Copy handle over signals, so it can move into event handlers and
/// spawned tasks freely.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
    duration: Duration,
}

impl ToastQueue {
    /// Must be called inside a component (it allocates signals).
    pub fn new(duration: Duration) -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
            duration,
        }
    }

    /// Snapshot of the visible toasts, oldest first.
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.read().clone()
    }

    /// Remove a toast. Unknown ids are ignored (already dismissed).
    pub fn dismiss(&self, id: u64) {
        let mut entries = self.entries;
        entries.write().retain(|entry| entry.id != id);
    }

    fn push(&self, notification: Notification) -> u64 {
        let mut next_id = self.next_id;
        let mut entries = self.entries;

        let id = *next_id.peek();
        next_id.set(id + 1);
        entries.write().push(ToastEntry { id, notification });
        id
    }
}

impl Notifier for ToastQueue {
    /// Show the toast and schedule its removal.
    fn notify(&self, notification: Notification) {
        tracing::debug!(error = notification.is_error(), title = %notification.title, "Toast");

        let id = self.push(notification);
        let queue = *self;
        spawn(async move {
            sleep(queue.duration).await;
            queue.dismiss(id);
        });
    }
}

/// Hook to access the toast queue from context.
pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>()
}

/// Hook to access the form config from context.
pub fn use_form_config() -> FormConfig {
    use_context::<FormConfig>()
}

/// Timer future for the current platform.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo::timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
