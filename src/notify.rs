//! In-process user notifications.
//!
//! Replaces host-native blocking dialogs: the backend buffers
//! `Notification` entries and the frontend drains them to render toasts.
//! Tests assert on the buffered entries instead of a platform dialog call.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single user-facing notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// In-memory notification buffer. Entries accumulate until the frontend
/// drains them.
pub struct Notifier {
    buffer: Mutex<Vec<Notification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// Queue a notification for the frontend.
    pub fn notify(&self, level: NotificationLevel, message: &str) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(Notification {
                level,
                message: message.to_string(),
                at: Utc::now(),
            });
        }
        tracing::debug!(?level, message, "Notification queued");
    }

    /// Snapshot of pending notifications without clearing them.
    pub fn entries(&self) -> Vec<Notification> {
        self.buffer
            .lock()
            .map(|buf| buf.clone())
            .unwrap_or_default()
    }

    /// Remove and return all pending notifications.
    pub fn drain(&self) -> Vec<Notification> {
        self.buffer
            .lock()
            .map(|mut buf| buf.drain(..).collect())
            .unwrap_or_default()
    }

    /// Current buffer size.
    pub fn pending(&self) -> usize {
        self.buffer.lock().map(|buf| buf.len()).unwrap_or(0)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_buffers_entries() {
        let notifier = Notifier::new();
        assert_eq!(notifier.pending(), 0);

        notifier.notify(NotificationLevel::Success, "Alert marked as resolved.");
        assert_eq!(notifier.pending(), 1);

        let entries = notifier.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, NotificationLevel::Success);
        assert_eq!(entries[0].message, "Alert marked as resolved.");
    }

    #[test]
    fn drain_clears_buffer() {
        let notifier = Notifier::new();
        notifier.notify(NotificationLevel::Info, "first");
        notifier.notify(NotificationLevel::Warning, "second");
        assert_eq!(notifier.pending(), 2);

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(notifier.pending(), 0);
    }

    #[test]
    fn entries_keeps_buffer_intact() {
        let notifier = Notifier::new();
        notifier.notify(NotificationLevel::Error, "boom");
        let _ = notifier.entries();
        assert_eq!(notifier.pending(), 1);
    }

    #[test]
    fn level_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&NotificationLevel::Success).unwrap(),
            "\"success\""
        );
    }
}
