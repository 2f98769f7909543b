//! Shared application state.
//!
//! One `CoreState` is created at startup, wrapped in `Arc`, and managed by
//! Tauri so every IPC command sees the same repository handle, sync engine,
//! notifier, shell state, and (at most one) open detail session. State is
//! never shared across view boundaries in any other way: opening a detail
//! session always resolves fresh from the repository, and closing it drops
//! the checklist and note.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::detail::DetailSession;
use crate::models::{ActiveTab, TimeRange};
use crate::notify::Notifier;
use crate::store::{AlertRepository, InMemoryAlertStore, StoreError};
use crate::sync::SyncEngine;

/// Top-level navigation and filter state for the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub active_tab: ActiveTab,
    pub time_range: TimeRange,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::Alerts,
            time_range: TimeRange::Last7,
        }
    }
}

pub struct CoreState {
    store: Arc<dyn AlertRepository>,
    sync: SyncEngine,
    notifier: Notifier,
    shell: RwLock<ShellState>,
    /// The open detail session. `None` while the user is on a top-level tab.
    detail: RwLock<Option<DetailSession>>,
}

impl CoreState {
    /// State backed by the fixed reference data set and the default 2 s
    /// sync delay.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryAlertStore::with_reference_data()))
    }

    pub fn with_store(store: Arc<dyn AlertRepository>) -> Self {
        Self {
            store,
            sync: SyncEngine::new(),
            notifier: Notifier::new(),
            shell: RwLock::new(ShellState::default()),
            detail: RwLock::new(None),
        }
    }

    /// State with an injected sync delay, used by command tests.
    pub fn with_store_and_sync_delay(store: Arc<dyn AlertRepository>, delay: Duration) -> Self {
        Self {
            store,
            sync: SyncEngine::with_delay(delay),
            notifier: Notifier::new(),
            shell: RwLock::new(ShellState::default()),
            detail: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &dyn AlertRepository {
        self.store.as_ref()
    }

    pub fn sync(&self) -> &SyncEngine {
        &self.sync
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    // ── Shell state ─────────────────────────────────────────

    pub fn shell_state(&self) -> ShellState {
        self.shell
            .read()
            .map(|shell| *shell)
            .unwrap_or_default()
    }

    pub fn set_active_tab(&self, tab: ActiveTab) -> Result<(), CoreError> {
        let mut shell = self.shell.write().map_err(|_| CoreError::LockPoisoned)?;
        shell.active_tab = tab;
        Ok(())
    }

    pub fn set_time_range(&self, range: TimeRange) -> Result<(), CoreError> {
        let mut shell = self.shell.write().map_err(|_| CoreError::LockPoisoned)?;
        shell.time_range = range;
        Ok(())
    }

    // ── Detail session ──────────────────────────────────────

    /// Acquire a read lock on the detail session.
    pub fn read_detail(
        &self,
    ) -> Result<RwLockReadGuard<'_, Option<DetailSession>>, CoreError> {
        self.detail.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the detail session.
    pub fn write_detail(
        &self,
    ) -> Result<RwLockWriteGuard<'_, Option<DetailSession>>, CoreError> {
        self.detail.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Replace the open detail session (navigating to detail).
    pub fn set_detail(&self, session: DetailSession) -> Result<(), CoreError> {
        let mut guard = self.detail.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = Some(session);
        Ok(())
    }

    /// Drop the open detail session (navigating back). Checklist and note
    /// state go with it.
    pub fn clear_detail(&self) -> Result<(), CoreError> {
        let mut guard = self.detail.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = None;
        Ok(())
    }

    /// Tear down view-facing state: close the detail session and cancel any
    /// in-flight sync so no timer completion lands afterwards.
    pub fn teardown(&self) {
        if let Ok(mut guard) = self.detail.write() {
            *guard = None;
        }
        self.sync.cancel();
        tracing::info!("View state torn down");
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No alert detail is open")]
    NoOpenDetail,
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::DetailSession;

    #[test]
    fn new_state_has_no_open_detail() {
        let state = CoreState::new();
        let guard = state.read_detail().unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn shell_defaults_to_alerts_tab_and_week_range() {
        let state = CoreState::new();
        let shell = state.shell_state();
        assert_eq!(shell.active_tab, ActiveTab::Alerts);
        assert_eq!(shell.time_range, TimeRange::Last7);
    }

    #[test]
    fn tab_and_range_round_trip() {
        let state = CoreState::new();
        state.set_active_tab(ActiveTab::Dashboard).unwrap();
        state.set_time_range(TimeRange::Last30).unwrap();

        let shell = state.shell_state();
        assert_eq!(shell.active_tab, ActiveTab::Dashboard);
        assert_eq!(shell.time_range, TimeRange::Last30);
    }

    #[test]
    fn set_and_clear_detail() {
        let state = CoreState::new();
        let session = DetailSession::open(state.store(), "2").unwrap();
        state.set_detail(session).unwrap();
        assert!(state.read_detail().unwrap().is_some());

        state.clear_detail().unwrap();
        assert!(state.read_detail().unwrap().is_none());
    }

    #[test]
    fn clear_detail_on_empty_is_safe() {
        let state = CoreState::new();
        assert!(state.clear_detail().is_ok());
    }

    #[tokio::test]
    async fn teardown_closes_detail_and_cancels_sync() {
        let state = CoreState::with_store_and_sync_delay(
            Arc::new(InMemoryAlertStore::with_reference_data()),
            Duration::from_millis(20),
        );
        let session = DetailSession::open(state.store(), "1").unwrap();
        state.set_detail(session).unwrap();
        state.sync().trigger();

        state.teardown();
        assert!(state.read_detail().unwrap().is_none());
        assert!(!state.sync().status().syncing);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(state.sync().status().last_sync, "10 mins ago");
    }

    #[test]
    fn concurrent_reads_do_not_block() {
        use std::thread;

        let state = Arc::new(CoreState::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let state = Arc::clone(&state);
            handles.push(thread::spawn(move || {
                let guard = state.read_detail().unwrap();
                assert!(guard.is_none());
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn core_error_display() {
        assert_eq!(
            CoreError::NoOpenDetail.to_string(),
            "No alert detail is open"
        );
        assert_eq!(CoreError::LockPoisoned.to_string(), "Internal lock error");
    }
}
