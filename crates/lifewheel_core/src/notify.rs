//! Notification side-channel for store mutations.
//!
//! # Responsibility
//! - Define the toast-style feedback contract used by the store.
//! - Provide log-backed and in-memory notifier implementations.
//!
//! # Invariants
//! - Notifiers never fail and never feed back into store state.

use log::{info, warn};
use serde::Serialize;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Default,
    /// Failed action, shown as an error.
    Destructive,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

/// Transient user feedback produced by a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Default,
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Receiver of store feedback (toast service, log, test probe).
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that only writes metadata to the `log` facade.
///
/// Titles and messages may contain user text, so only severity and lengths
/// are logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Default => info!(
                "event=notify module=notify status=ok severity={} message_chars={}",
                notification.severity.as_str(),
                notification.message.chars().count()
            ),
            Severity::Destructive => warn!(
                "event=notify module=notify status=error severity={} message_chars={}",
                notification.severity.as_str(),
                notification.message.chars().count()
            ),
        }
    }
}

/// Notifier that keeps every notification in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    received: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> &[Notification] {
        &self.received
    }

    pub fn last(&self) -> Option<&Notification> {
        self.received.last()
    }

    /// Removes and returns everything received so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.received)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::{Notification, Notifier, RecordingNotifier, Severity};

    #[test]
    fn recording_notifier_keeps_arrival_order() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify(Notification::success("a", "first"));
        notifier.notify(Notification::failure("b", "second"));

        let received = notifier.drain();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].severity, Severity::Default);
        assert!(received[1].is_failure());
        assert!(notifier.received().is_empty());
    }
}
