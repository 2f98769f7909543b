pub mod commands;
pub mod config;
pub mod core_state;
pub mod dashboard;
pub mod detail;
pub mod feed;
pub mod models;
pub mod notify;
pub mod officer;
pub mod store;
pub mod sync;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    tauri::Builder::default()
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::get_shell_state,
            commands::set_active_tab,
            commands::logout,
            commands::drain_notifications,
            commands::feed::get_alert_feed,
            commands::dashboard::get_dashboard_data,
            commands::dashboard::set_time_range,
            commands::dashboard::trigger_sync,
            commands::dashboard::get_sync_status,
            commands::dashboard::cancel_sync,
            commands::officer::get_officer_profile,
            commands::detail::open_alert_detail,
            commands::detail::get_alert_detail,
            commands::detail::toggle_recommended_action,
            commands::detail::set_officer_note,
            commands::detail::submit_alert_action,
            commands::detail::close_alert_detail,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Drishti");
}
