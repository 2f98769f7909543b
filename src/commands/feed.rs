//! Alert feed IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::feed::{build_feed, AlertFeed};

/// Fetch the alert list with derived severity counters.
#[tauri::command]
pub fn get_alert_feed(state: State<'_, Arc<CoreState>>) -> Result<AlertFeed, String> {
    build_feed(state.store()).map_err(|e| e.to_string())
}
