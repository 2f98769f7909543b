use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AlertAction, DistrictHealth, Severity, TrendDirection};

/// One row of the alert feed. Immutable; sourced from the repository's
/// fixed ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub id: String,
    pub district: String,
    pub severity: Severity,
    pub metric: String,
    pub deviation_percent: f64,
    pub relative_timestamp: String,
}

/// Extended alert record for the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDetail {
    pub id: String,
    pub district: String,
    pub severity: Severity,
    pub metric: String,
    pub deviation_percent: f64,
    pub relative_timestamp: String,
    pub current_count: u32,
    pub baseline_count: u32,
    pub probable_causes: Vec<String>,
    pub recommended_actions: Vec<String>,
}

/// One point of the regional 6-month trend series.
///
/// The series is a reference data set for the region as a whole; it is
/// deliberately not keyed by alert id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub value: u32,
}

/// One band of the regional age-group breakdown. Percentages are not
/// required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroupBand {
    pub range: String,
    pub percentage: u8,
    pub count: u32,
}

/// One row of the dashboard's district status table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictStatusRow {
    pub district: String,
    pub status: DistrictHealth,
    pub last_alert: String,
    pub trend: TrendDirection,
    pub trend_percent: f64,
}

/// Static record of the signed-in field officer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficerProfile {
    pub name: String,
    pub role: String,
    pub officer_id: String,
    pub department: String,
    pub assigned_districts: u32,
    pub contact: String,
}

/// Regional reference numbers the dashboard cannot derive from the
/// alert collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceStats {
    pub resolution_rate_percent: u8,
}

/// Acknowledgement of a status update accepted by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub alert_id: String,
    pub action: AlertAction,
    pub acknowledged_at: DateTime<Utc>,
}

/// Journal entry recorded for every accepted status update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub alert_id: String,
    pub action: AlertAction,
    pub note: String,
    pub at: DateTime<Utc>,
}
