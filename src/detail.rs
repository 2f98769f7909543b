//! Alert detail session.
//!
//! One session per opened alert: resolved fresh from the repository on open
//! (unknown ids fall back to the default record), then holds the
//! recommended-action checklist, the officer note, and the lifecycle state.
//! A terminal action submits exactly one status update, emits one
//! notification, and closes the session for good; nothing carries back to
//! the feed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Ack, AlertAction, AlertDetail};
use crate::notify::{NotificationLevel, Notifier};
use crate::store::{AlertRepository, StoreError};

/// Lifecycle of one detail session. Terminal states accept no further
/// transitions within the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLifecycle {
    Displayed,
    Resolved,
    Escalated,
    MarkedFalse,
}

#[derive(Error, Debug)]
pub enum DetailError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Recommended action index {index} out of range (len {len})")]
    ActionIndexOutOfRange { index: usize, len: usize },

    #[error("Detail session already closed by a terminal action")]
    AlreadyClosed,
}

pub struct DetailSession {
    alert: AlertDetail,
    /// The id the user navigated with; may differ from `alert.id` when the
    /// fallback record was substituted.
    requested_id: String,
    checked: HashMap<usize, bool>,
    note: String,
    lifecycle: DetailLifecycle,
}

impl DetailSession {
    /// Open a session for `id`, resolving through the repository's fallback
    /// policy. All actions start unchecked and the note starts empty.
    pub fn open(repo: &dyn AlertRepository, id: &str) -> Result<Self, DetailError> {
        let alert = repo.get_detail(id)?;
        if alert.id != id {
            tracing::info!(requested = id, resolved = %alert.id, "Detail opened via fallback record");
        }
        Ok(Self {
            alert,
            requested_id: id.to_string(),
            checked: HashMap::new(),
            note: String::new(),
            lifecycle: DetailLifecycle::Displayed,
        })
    }

    pub fn alert(&self) -> &AlertDetail {
        &self.alert
    }

    pub fn requested_id(&self) -> &str {
        &self.requested_id
    }

    pub fn lifecycle(&self) -> DetailLifecycle {
        self.lifecycle
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Free text, no length limit.
    pub fn set_note(&mut self, text: &str) {
        self.note = text.to_string();
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(&index).copied().unwrap_or(false)
    }

    /// Checkbox states aligned with `recommended_actions` order.
    pub fn checked_states(&self) -> Vec<bool> {
        (0..self.alert.recommended_actions.len())
            .map(|i| self.is_checked(i))
            .collect()
    }

    /// Flip exactly one checklist entry. Indices are stable because the
    /// action list is a fixed ordered sequence.
    pub fn toggle_action(&mut self, index: usize) -> Result<(), DetailError> {
        let len = self.alert.recommended_actions.len();
        if index >= len {
            return Err(DetailError::ActionIndexOutOfRange { index, len });
        }
        let entry = self.checked.entry(index).or_insert(false);
        *entry = !*entry;
        Ok(())
    }

    /// Deviation bar width in percent, clamped to [0, 100]. Reference data
    /// never exceeds the range but a wired backend might.
    pub fn deviation_bar_width(&self) -> f64 {
        self.alert.deviation_percent.clamp(0.0, 100.0)
    }

    /// Submit a terminal action: one status update carrying the current
    /// note, one confirmation notification, then the session is closed.
    ///
    /// A session already closed by a terminal action rejects further
    /// submissions, so a double tap cannot produce a second update. On
    /// repository failure the session stays open and retryable and no
    /// notification is emitted.
    pub fn submit(
        &mut self,
        repo: &dyn AlertRepository,
        notifier: &Notifier,
        action: AlertAction,
    ) -> Result<Ack, DetailError> {
        if self.lifecycle != DetailLifecycle::Displayed {
            return Err(DetailError::AlreadyClosed);
        }

        let ack = repo.update_status(&self.alert.id, action, &self.note)?;

        let (level, message) = confirmation_for(action);
        notifier.notify(level, message);
        self.lifecycle = match action {
            AlertAction::Resolve => DetailLifecycle::Resolved,
            AlertAction::Escalate => DetailLifecycle::Escalated,
            AlertAction::MarkFalse => DetailLifecycle::MarkedFalse,
        };
        tracing::info!(
            alert_id = %self.alert.id,
            action = action.as_str(),
            "Detail session closed by terminal action"
        );
        Ok(ack)
    }
}

/// Confirmation notification for each terminal action.
fn confirmation_for(action: AlertAction) -> (NotificationLevel, &'static str) {
    match action {
        AlertAction::Resolve => (
            NotificationLevel::Success,
            "Alert marked as resolved. This will be logged in the system.",
        ),
        AlertAction::Escalate => (
            NotificationLevel::Warning,
            "Alert escalated to State Officer. Notification sent.",
        ),
        AlertAction::MarkFalse => (
            NotificationLevel::Info,
            "Marked as false alert. This will be reviewed by the system.",
        ),
    }
}
