//! In-memory alert store carrying the fixed reference data set.
//!
//! Five feed alerts, two extended detail records ("1" and "2"), the regional
//! trend and age-group series, the eight-district status table, the officer
//! record, and the regional resolution rate. Status updates are journaled in
//! memory so callers (and tests) can observe exactly what was submitted.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::config::FALLBACK_ALERT_ID;
use crate::models::{
    Ack, AgeGroupBand, AlertAction, AlertDetail, AlertSummary, DistrictHealth, DistrictStatusRow,
    OfficerProfile, ReferenceStats, Severity, StatusUpdate, TrendDirection, TrendPoint,
};
use crate::store::{AlertRepository, StoreError};

pub struct InMemoryAlertStore {
    summaries: Vec<AlertSummary>,
    details: HashMap<String, AlertDetail>,
    districts: Vec<DistrictStatusRow>,
    trend: Vec<TrendPoint>,
    age_bands: Vec<AgeGroupBand>,
    officer: OfficerProfile,
    stats: ReferenceStats,
    updates: Mutex<Vec<StatusUpdate>>,
}

impl InMemoryAlertStore {
    /// Store populated with the full reference data set.
    pub fn with_reference_data() -> Self {
        Self {
            summaries: reference_summaries(),
            details: reference_details(),
            districts: reference_districts(),
            trend: reference_trend(),
            age_bands: reference_age_bands(),
            officer: reference_officer(),
            stats: ReferenceStats {
                resolution_rate_percent: 87,
            },
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Store with no alerts at all. The feed and dashboard must render
    /// zero counters and empty tables against this, not fail.
    pub fn empty() -> Self {
        Self {
            summaries: Vec::new(),
            details: HashMap::new(),
            districts: Vec::new(),
            trend: Vec::new(),
            age_bands: Vec::new(),
            officer: reference_officer(),
            stats: ReferenceStats {
                resolution_rate_percent: 0,
            },
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Journaled status updates, oldest first.
    pub fn status_updates(&self) -> Vec<StatusUpdate> {
        self.updates
            .lock()
            .map(|u| u.clone())
            .unwrap_or_default()
    }
}

impl AlertRepository for InMemoryAlertStore {
    fn list_summaries(&self) -> Result<Vec<AlertSummary>, StoreError> {
        Ok(self.summaries.clone())
    }

    fn get_detail(&self, id: &str) -> Result<AlertDetail, StoreError> {
        if let Some(detail) = self.details.get(id) {
            return Ok(detail.clone());
        }
        tracing::debug!(id, "No detail record for id, using fallback");
        self.details
            .get(FALLBACK_ALERT_ID)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "alert_detail".into(),
                id: id.to_string(),
            })
    }

    fn update_status(
        &self,
        id: &str,
        action: AlertAction,
        note: &str,
    ) -> Result<Ack, StoreError> {
        let now = Utc::now();
        let mut updates = self
            .updates
            .lock()
            .map_err(|_| StoreError::Unavailable("status journal lock poisoned".into()))?;
        updates.push(StatusUpdate {
            alert_id: id.to_string(),
            action,
            note: note.to_string(),
            at: now,
        });
        tracing::info!(alert_id = id, action = action.as_str(), "Status update journaled");
        Ok(Ack {
            alert_id: id.to_string(),
            action,
            acknowledged_at: now,
        })
    }

    fn district_statuses(&self) -> Result<Vec<DistrictStatusRow>, StoreError> {
        Ok(self.districts.clone())
    }

    fn trend_series(&self) -> Result<Vec<TrendPoint>, StoreError> {
        Ok(self.trend.clone())
    }

    fn age_breakdown(&self) -> Result<Vec<AgeGroupBand>, StoreError> {
        Ok(self.age_bands.clone())
    }

    fn officer_profile(&self) -> Result<OfficerProfile, StoreError> {
        Ok(self.officer.clone())
    }

    fn reference_stats(&self) -> Result<ReferenceStats, StoreError> {
        Ok(self.stats.clone())
    }
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

fn summary(
    id: &str,
    district: &str,
    severity: Severity,
    metric: &str,
    deviation_percent: f64,
    relative_timestamp: &str,
) -> AlertSummary {
    AlertSummary {
        id: id.into(),
        district: district.into(),
        severity,
        metric: metric.into(),
        deviation_percent,
        relative_timestamp: relative_timestamp.into(),
    }
}

fn reference_summaries() -> Vec<AlertSummary> {
    vec![
        summary("1", "Bangalore Urban", Severity::Critical, "Enrollment", 42.5, "2 hours ago"),
        summary("2", "Mysuru", Severity::Warning, "Biometric Update", 28.3, "4 hours ago"),
        summary("3", "Mandya", Severity::Critical, "Demographic Update", 55.8, "5 hours ago"),
        summary("4", "Hassan", Severity::Warning, "Enrollment", 18.2, "7 hours ago"),
        summary("5", "Tumakuru", Severity::Critical, "Biometric Update", 67.4, "9 hours ago"),
    ]
}

fn reference_details() -> HashMap<String, AlertDetail> {
    let mut details = HashMap::new();
    details.insert(
        "1".to_string(),
        AlertDetail {
            id: "1".into(),
            district: "Bangalore Urban".into(),
            severity: Severity::Critical,
            metric: "Enrollment".into(),
            deviation_percent: 42.5,
            relative_timestamp: "2 hours ago".into(),
            current_count: 1650,
            baseline_count: 2380,
            probable_causes: vec![
                "Significant reduction in enrollment center operational hours (3 out of 8 centers operating part-time)".into(),
                "Staff shortage reported in 2 major centers due to medical leave".into(),
                "System downtime recorded for 6 hours on Feb 12, 2025 affecting online bookings".into(),
            ],
            recommended_actions: vec![
                "Verify enrollment center operations".into(),
                "Check staff availability".into(),
                "Review pending applications".into(),
                "Inspect biometric device functionality".into(),
                "Coordinate with center supervisors".into(),
            ],
        },
    );
    details.insert(
        "2".to_string(),
        AlertDetail {
            id: "2".into(),
            district: "Mysuru".into(),
            severity: Severity::Warning,
            metric: "Biometric Update".into(),
            deviation_percent: 28.3,
            relative_timestamp: "4 hours ago".into(),
            current_count: 1850,
            baseline_count: 2580,
            probable_causes: vec![
                "Increase in biometric mismatch errors at primary enrollment center".into(),
                "Aging biometric capture devices requiring calibration".into(),
                "Network connectivity issues in rural enrollment stations".into(),
            ],
            recommended_actions: vec![
                "Verify enrollment center operations".into(),
                "Check staff availability".into(),
                "Review pending applications".into(),
                "Inspect biometric device functionality".into(),
            ],
        },
    );
    details
}

fn district(
    name: &str,
    status: DistrictHealth,
    last_alert: &str,
    trend: TrendDirection,
    trend_percent: f64,
) -> DistrictStatusRow {
    DistrictStatusRow {
        district: name.into(),
        status,
        last_alert: last_alert.into(),
        trend,
        trend_percent,
    }
}

fn reference_districts() -> Vec<DistrictStatusRow> {
    vec![
        district("Bangalore Urban", DistrictHealth::Critical, "2 hours ago", TrendDirection::Up, 42.0),
        district("Mysuru", DistrictHealth::Warning, "4 hours ago", TrendDirection::Up, 28.0),
        district("Mandya", DistrictHealth::Normal, "2 days ago", TrendDirection::Down, 5.0),
        district("Hassan", DistrictHealth::Normal, "3 days ago", TrendDirection::Down, 12.0),
        district("Tumakuru", DistrictHealth::Critical, "9 hours ago", TrendDirection::Up, 67.0),
        district("Chikkamagaluru", DistrictHealth::Normal, "5 days ago", TrendDirection::Down, 8.0),
        district("Chitradurga", DistrictHealth::Normal, "1 week ago", TrendDirection::Down, 3.0),
        district("Davanagere", DistrictHealth::Normal, "4 days ago", TrendDirection::Down, 15.0),
    ]
}

fn reference_trend() -> Vec<TrendPoint> {
    [
        ("Sep", 2340),
        ("Oct", 2450),
        ("Nov", 2380),
        ("Dec", 2280),
        ("Jan", 2150),
        ("Feb", 1650),
    ]
    .into_iter()
    .map(|(month, value)| TrendPoint {
        month: month.into(),
        value,
    })
    .collect()
}

fn reference_age_bands() -> Vec<AgeGroupBand> {
    [
        ("0-18 years", 12, 245),
        ("19-35 years", 38, 780),
        ("36-60 years", 35, 720),
        ("60+ years", 15, 308),
    ]
    .into_iter()
    .map(|(range, percentage, count)| AgeGroupBand {
        range: range.into(),
        percentage,
        count,
    })
    .collect()
}

fn reference_officer() -> OfficerProfile {
    OfficerProfile {
        name: "Rajesh Kumar".into(),
        role: "Field Officer - Karnataka Region".into(),
        officer_id: "FO-KA-2024-1247".into(),
        department: "UIDAI Field Operations".into(),
        assigned_districts: 8,
        contact: "+91 98765 43210".into(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
