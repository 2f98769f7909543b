//! Dashboard view model.
//!
//! Every count is derived from the shared read model at build time: active,
//! critical, and warning card values fold over the same collection the feed
//! renders, and the monitored-district count is the status table length.
//! Only the resolution rate comes from stored reference stats. The time
//! range filter is cosmetic and recomputes nothing.

use serde::{Deserialize, Serialize};

use crate::feed::{count_by_severity, Tone};
use crate::models::{DistrictHealth, DistrictStatusRow, TimeRange};
use crate::store::{AlertRepository, StoreError};
use crate::sync::SyncStatus;

/// Icon shown in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    CheckCircle,
    AlertTriangle,
}

/// Rendering hint for one district status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusIndicator {
    pub icon: StatusIcon,
    pub tone: Tone,
}

/// Summary card values at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub active_alerts: u32,
    pub critical: u32,
    pub warning: u32,
    pub districts_monitored: u32,
    pub resolution_rate_percent: u8,
    pub last_sync: String,
    pub syncing: bool,
}

/// A status table row paired with its indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictRowView {
    #[serde(flatten)]
    pub row: DistrictStatusRow,
    pub indicator: StatusIndicator,
}

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub districts: Vec<DistrictRowView>,
    pub time_range: TimeRange,
}

/// Icon and tone for a district status. Pure and exhaustive.
pub fn status_indicator(status: DistrictHealth) -> StatusIndicator {
    match status {
        DistrictHealth::Normal => StatusIndicator {
            icon: StatusIcon::CheckCircle,
            tone: Tone::Green,
        },
        DistrictHealth::Warning => StatusIndicator {
            icon: StatusIcon::AlertTriangle,
            tone: Tone::Yellow,
        },
        DistrictHealth::Critical => StatusIndicator {
            icon: StatusIcon::AlertTriangle,
            tone: Tone::Red,
        },
    }
}

/// Assemble the dashboard from the shared read model and the sync engine.
pub fn build_dashboard(
    repo: &dyn AlertRepository,
    time_range: TimeRange,
    sync: SyncStatus,
) -> Result<DashboardData, StoreError> {
    let summaries = repo.list_summaries()?;
    let counters = count_by_severity(&summaries);
    let rows = repo.district_statuses()?;
    let stats = repo.reference_stats()?;

    let summary = DashboardSummary {
        active_alerts: summaries.len() as u32,
        critical: counters.critical,
        warning: counters.warning,
        districts_monitored: rows.len() as u32,
        resolution_rate_percent: stats.resolution_rate_percent,
        last_sync: sync.last_sync,
        syncing: sync.syncing,
    };

    let districts = rows
        .into_iter()
        .map(|row| DistrictRowView {
            indicator: status_indicator(row.status),
            row,
        })
        .collect();

    Ok(DashboardData {
        summary,
        districts,
        time_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAlertStore;
    use crate::sync::SyncEngine;

    fn idle_sync() -> SyncStatus {
        SyncEngine::new().status()
    }

    #[test]
    fn indicator_is_pure_function_of_status() {
        assert_eq!(
            status_indicator(DistrictHealth::Normal),
            StatusIndicator {
                icon: StatusIcon::CheckCircle,
                tone: Tone::Green
            }
        );
        assert_eq!(
            status_indicator(DistrictHealth::Warning),
            StatusIndicator {
                icon: StatusIcon::AlertTriangle,
                tone: Tone::Yellow
            }
        );
        assert_eq!(
            status_indicator(DistrictHealth::Critical),
            StatusIndicator {
                icon: StatusIcon::AlertTriangle,
                tone: Tone::Red
            }
        );
    }

    #[test]
    fn summary_cards_derive_from_read_model() {
        let store = InMemoryAlertStore::with_reference_data();
        let data = build_dashboard(&store, TimeRange::Last7, idle_sync()).unwrap();

        assert_eq!(data.summary.active_alerts, 5);
        assert_eq!(data.summary.critical, 3);
        assert_eq!(data.summary.warning, 2);
        assert_eq!(data.summary.districts_monitored, 8);
        assert_eq!(data.summary.resolution_rate_percent, 87);
        assert_eq!(data.summary.last_sync, "10 mins ago");
        assert!(!data.summary.syncing);
    }

    #[test]
    fn district_rows_carry_indicators() {
        let store = InMemoryAlertStore::with_reference_data();
        let data = build_dashboard(&store, TimeRange::Last7, idle_sync()).unwrap();

        assert_eq!(data.districts.len(), 8);
        let bangalore = &data.districts[0];
        assert_eq!(bangalore.row.district, "Bangalore Urban");
        assert_eq!(bangalore.indicator.icon, StatusIcon::AlertTriangle);
        assert_eq!(bangalore.indicator.tone, Tone::Red);

        let mandya = &data.districts[2];
        assert_eq!(mandya.indicator.icon, StatusIcon::CheckCircle);
        assert_eq!(mandya.indicator.tone, Tone::Green);
    }

    #[test]
    fn time_range_is_cosmetic() {
        let store = InMemoryAlertStore::with_reference_data();
        let week = build_dashboard(&store, TimeRange::Last7, idle_sync()).unwrap();
        let quarter = build_dashboard(&store, TimeRange::Last90, idle_sync()).unwrap();

        assert_eq!(week.summary, quarter.summary);
        assert_eq!(week.districts.len(), quarter.districts.len());
        assert_eq!(quarter.time_range, TimeRange::Last90);
    }

    #[test]
    fn empty_store_renders_zero_dashboard() {
        let store = InMemoryAlertStore::empty();
        let data = build_dashboard(&store, TimeRange::Last7, idle_sync()).unwrap();
        assert_eq!(data.summary.active_alerts, 0);
        assert_eq!(data.summary.critical, 0);
        assert_eq!(data.summary.districts_monitored, 0);
        assert!(data.districts.is_empty());
    }
}
