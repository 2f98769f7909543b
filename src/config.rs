/// Application-level constants
pub const APP_NAME: &str = "Drishti";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delay the simulated manual sync takes to complete.
pub const SYNC_DELAY_MS: u64 = 2000;

/// Detail lookups for unknown alert ids resolve to this record.
pub const FALLBACK_ALERT_ID: &str = "1";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "warn,drishti_lib=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_drishti() {
        assert_eq!(APP_NAME, "Drishti");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_parses_as_env_filter() {
        let filter = default_log_filter();
        assert!(filter.contains("drishti_lib"));
    }
}
