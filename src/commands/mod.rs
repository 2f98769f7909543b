pub mod dashboard;
pub mod detail;
pub mod feed;
pub mod officer;

use std::str::FromStr;
use std::sync::Arc;

use tauri::State;

use crate::core_state::{CoreState, ShellState};
use crate::models::ActiveTab;
use crate::notify::{Notification, NotificationLevel};

/// Health check IPC command — verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Current shell navigation and filter state.
#[tauri::command]
pub fn get_shell_state(state: State<'_, Arc<CoreState>>) -> ShellState {
    state.shell_state()
}

/// Switch the active bottom-navigation tab.
#[tauri::command]
pub fn set_active_tab(
    tab: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<ShellState, String> {
    let tab = ActiveTab::from_str(&tab).map_err(|e| e.to_string())?;
    state.set_active_tab(tab).map_err(|e| e.to_string())?;
    Ok(state.shell_state())
}

/// Log out of the shell. Session handling belongs to the host; the backend
/// tears down view state and confirms via notification.
#[tauri::command]
pub fn logout(state: State<'_, Arc<CoreState>>) -> Result<ShellState, String> {
    state.teardown();
    state
        .set_active_tab(ActiveTab::Alerts)
        .map_err(|e| e.to_string())?;
    state.notifier().notify(
        NotificationLevel::Info,
        "Logged out. You will be redirected to the login screen.",
    );
    Ok(state.shell_state())
}

/// Drain pending notifications for the frontend toast layer.
#[tauri::command]
pub fn drain_notifications(state: State<'_, Arc<CoreState>>) -> Vec<Notification> {
    state.notifier().drain()
}
