//! Manual sync engine for the dashboard.
//!
//! `trigger()` flips `syncing` on immediately and spawns one timer; when the
//! delay elapses the engine records completion ("Just now"). A trigger while
//! a cycle is in flight starts nothing. `cancel()` bumps the generation
//! counter so a timer that completes after teardown mutates nothing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SYNC_DELAY_MS;

/// Label shown before the first manual sync of the session.
const INITIAL_SYNC_LABEL: &str = "10 mins ago";

/// Label shown after a sync completes.
const SYNCED_LABEL: &str = "Just now";

/// Snapshot of the engine state for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatus {
    pub syncing: bool,
    pub last_sync: String,
    pub last_synced_at: Option<DateTime<Utc>>,
}

struct SyncState {
    syncing: bool,
    last_sync: String,
    last_synced_at: Option<DateTime<Utc>>,
    /// Incremented on every trigger and cancel; a completion only applies
    /// when its generation is still current.
    generation: u64,
}

pub struct SyncEngine {
    state: Arc<Mutex<SyncState>>,
    delay: Duration,
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(SYNC_DELAY_MS))
    }

    /// Engine with an injected delay, used by tests.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SyncState {
                syncing: false,
                last_sync: INITIAL_SYNC_LABEL.to_string(),
                last_synced_at: None,
                generation: 0,
            })),
            delay,
        }
    }

    /// Start a sync cycle. Returns `false` without starting a second timer
    /// if a cycle is already in flight.
    ///
    /// Must be called from within a tokio runtime (Tauri's async runtime in
    /// production, `#[tokio::test]` in tests).
    pub fn trigger(&self) -> bool {
        let generation = {
            let Ok(mut state) = self.state.lock() else {
                return false;
            };
            if state.syncing {
                tracing::debug!("Sync already in flight, ignoring trigger");
                return false;
            }
            state.syncing = true;
            state.generation += 1;
            state.generation
        };

        tracing::info!("Manual sync started");
        let state = Arc::clone(&self.state);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Ok(mut state) = state.lock() {
                if state.generation == generation && state.syncing {
                    state.syncing = false;
                    state.last_sync = SYNCED_LABEL.to_string();
                    state.last_synced_at = Some(Utc::now());
                    tracing::info!("Manual sync completed");
                } else {
                    tracing::debug!("Stale sync timer completion ignored");
                }
            }
        });
        true
    }

    /// Tear down any in-flight cycle. The pending timer completion becomes
    /// stale and applies nothing.
    pub fn cancel(&self) {
        if let Ok(mut state) = self.state.lock() {
            if state.syncing {
                tracing::info!("In-flight sync cancelled");
            }
            state.generation += 1;
            state.syncing = false;
        }
    }

    pub fn status(&self) -> SyncStatus {
        self.state
            .lock()
            .map(|state| SyncStatus {
                syncing: state.syncing,
                last_sync: state.last_sync.clone(),
                last_synced_at: state.last_synced_at,
            })
            .unwrap_or(SyncStatus {
                syncing: false,
                last_sync: INITIAL_SYNC_LABEL.to_string(),
                last_synced_at: None,
            })
    }
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}
