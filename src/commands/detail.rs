//! Alert detail IPC commands.
//!
//! `open_alert_detail` starts a fresh session (replacing any open one);
//! edits and the terminal actions operate on that session; submission and
//! `close_alert_detail` drop it, so nothing carries back to the feed.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::core_state::{CoreError, CoreState};
use crate::detail::{DetailLifecycle, DetailSession};
use crate::models::{Ack, AgeGroupBand, AlertAction, AlertDetail, TrendPoint};

/// Everything the detail screen renders, assembled per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailView {
    #[serde(flatten)]
    pub alert: AlertDetail,
    pub requested_id: String,
    pub deviation_bar_width: f64,
    pub checked_actions: Vec<bool>,
    pub note: String,
    pub lifecycle: DetailLifecycle,
    pub trend: Vec<TrendPoint>,
    pub age_breakdown: Vec<AgeGroupBand>,
}

/// Result of a terminal action. The frontend navigates back to the feed
/// once it receives this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailOutcome {
    pub ack: Ack,
    pub lifecycle: DetailLifecycle,
}

fn view_of(session: &DetailSession, state: &CoreState) -> Result<DetailView, String> {
    let trend = state.store().trend_series().map_err(|e| e.to_string())?;
    let age_breakdown = state.store().age_breakdown().map_err(|e| e.to_string())?;
    Ok(DetailView {
        alert: session.alert().clone(),
        requested_id: session.requested_id().to_string(),
        deviation_bar_width: session.deviation_bar_width(),
        checked_actions: session.checked_states(),
        note: session.note().to_string(),
        lifecycle: session.lifecycle(),
        trend,
        age_breakdown,
    })
}

/// Navigate to the detail screen for one alert. Unknown ids resolve to the
/// fallback record; this never fails on identifier shape.
#[tauri::command]
pub fn open_alert_detail(
    alert_id: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<DetailView, String> {
    let session = DetailSession::open(state.store(), &alert_id).map_err(|e| e.to_string())?;
    let view = view_of(&session, &state)?;
    state.set_detail(session).map_err(|e| e.to_string())?;
    Ok(view)
}

/// Re-fetch the currently open detail screen.
#[tauri::command]
pub fn get_alert_detail(state: State<'_, Arc<CoreState>>) -> Result<DetailView, String> {
    let guard = state.read_detail().map_err(|e| e.to_string())?;
    let session = guard.as_ref().ok_or(CoreError::NoOpenDetail.to_string())?;
    view_of(session, &state)
}

/// Flip one recommended-action checkbox.
#[tauri::command]
pub fn toggle_recommended_action(
    index: usize,
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<bool>, String> {
    let mut guard = state.write_detail().map_err(|e| e.to_string())?;
    let session = guard.as_mut().ok_or(CoreError::NoOpenDetail.to_string())?;
    session.toggle_action(index).map_err(|e| e.to_string())?;
    Ok(session.checked_states())
}

/// Update the officer note draft.
#[tauri::command]
pub fn set_officer_note(
    text: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    let mut guard = state.write_detail().map_err(|e| e.to_string())?;
    let session = guard.as_mut().ok_or(CoreError::NoOpenDetail.to_string())?;
    session.set_note(&text);
    Ok(())
}

/// Submit a terminal action for the open detail session. On success the
/// session is closed and dropped; the frontend navigates back to the feed.
#[tauri::command]
pub fn submit_alert_action(
    action: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<DetailOutcome, String> {
    let action = AlertAction::from_str(&action).map_err(|e| e.to_string())?;

    let mut guard = state.write_detail().map_err(|e| e.to_string())?;
    let session = guard.as_mut().ok_or(CoreError::NoOpenDetail.to_string())?;
    let ack = session
        .submit(state.store(), state.notifier(), action)
        .map_err(|e| e.to_string())?;
    let lifecycle = session.lifecycle();
    *guard = None;

    Ok(DetailOutcome { ack, lifecycle })
}

/// Navigate back without a terminal action. Drops checklist and note.
#[tauri::command]
pub fn close_alert_detail(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    state.clear_detail().map_err(|e| e.to_string())
}
