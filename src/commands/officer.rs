//! Officer profile IPC command.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::models::OfficerProfile;
use crate::officer;

/// Fetch the signed-in officer's static record.
#[tauri::command]
pub fn get_officer_profile(
    state: State<'_, Arc<CoreState>>,
) -> Result<OfficerProfile, String> {
    officer::fetch_profile(state.store()).map_err(|e| e.to_string())
}
