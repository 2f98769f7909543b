//! Dashboard IPC commands: the aggregate view, the cosmetic time-range
//! filter, and the manual sync action.

use std::str::FromStr;
use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::dashboard::{build_dashboard, DashboardData};
use crate::models::TimeRange;
use crate::sync::SyncStatus;

/// Fetch all dashboard data in a single call.
#[tauri::command]
pub fn get_dashboard_data(
    state: State<'_, Arc<CoreState>>,
) -> Result<DashboardData, String> {
    let shell = state.shell_state();
    build_dashboard(state.store(), shell.time_range, state.sync().status())
        .map_err(|e| e.to_string())
}

/// Select the dashboard time range. Cosmetic: no displayed value is
/// recomputed from it.
#[tauri::command]
pub fn set_time_range(
    range: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<DashboardData, String> {
    let range = TimeRange::from_str(&range).map_err(|e| e.to_string())?;
    state.set_time_range(range).map_err(|e| e.to_string())?;
    build_dashboard(state.store(), range, state.sync().status()).map_err(|e| e.to_string())
}

/// Start a manual sync cycle. Returns the immediate status; a trigger while
/// a cycle is in flight starts nothing.
#[tauri::command]
pub async fn trigger_sync(state: State<'_, Arc<CoreState>>) -> Result<SyncStatus, String> {
    state.inner().sync().trigger();
    Ok(state.inner().sync().status())
}

/// Current sync status for polling.
#[tauri::command]
pub fn get_sync_status(state: State<'_, Arc<CoreState>>) -> SyncStatus {
    state.sync().status()
}

/// Cancel an in-flight sync cycle (dashboard teardown).
#[tauri::command]
pub fn cancel_sync(state: State<'_, Arc<CoreState>>) -> SyncStatus {
    state.sync().cancel();
    state.sync().status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAlertStore;
    use std::time::Duration;

    fn test_state() -> Arc<CoreState> {
        Arc::new(CoreState::with_store_and_sync_delay(
            Arc::new(InMemoryAlertStore::with_reference_data()),
            Duration::from_millis(20),
        ))
    }

    #[tokio::test]
    async fn sync_cycle_through_engine_handle() {
        let state = test_state();
        assert!(state.sync().trigger());
        assert!(state.sync().status().syncing);

        tokio::time::sleep(Duration::from_millis(80)).await;
        let status = state.sync().status();
        assert!(!status.syncing);
        assert_eq!(status.last_sync, "Just now");
    }

    #[test]
    fn dashboard_data_serializes_for_ipc() {
        let state = test_state();
        let shell = state.shell_state();
        let data = build_dashboard(state.store(), shell.time_range, state.sync().status())
            .unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["summary"]["active_alerts"], 5);
        assert_eq!(json["summary"]["resolution_rate_percent"], 87);
        assert_eq!(json["time_range"], "7");
        assert_eq!(json["districts"][0]["district"], "Bangalore Urban");
        assert_eq!(json["districts"][0]["indicator"]["tone"], "red");
    }
}
