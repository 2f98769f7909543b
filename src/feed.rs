//! Alert feed view model.
//!
//! The critical/warning counters are a pure fold over the live collection so
//! they can never drift from the underlying data, and the severity badge is
//! an exhaustive mapping off the closed `Severity` enum.

use serde::{Deserialize, Serialize};

use crate::models::{AlertSummary, Severity};
use crate::store::{AlertRepository, StoreError};

/// Band color used by badges and indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Red,
    Yellow,
    Green,
}

/// Summary counters shown above the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCounters {
    pub critical: u32,
    pub warning: u32,
}

/// Badge rendering for one severity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityBadge {
    pub label: &'static str,
    pub tone: Tone,
    pub caption: &'static str,
}

/// One feed entry paired with its badge.
#[derive(Debug, Clone, Serialize)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub alert: AlertSummary,
    pub badge: SeverityBadge,
}

/// Everything the alert list screen renders.
#[derive(Debug, Clone, Serialize)]
pub struct AlertFeed {
    pub counters: FeedCounters,
    pub alerts: Vec<FeedEntry>,
}

/// Fold the collection into severity counters.
pub fn count_by_severity(alerts: &[AlertSummary]) -> FeedCounters {
    alerts.iter().fold(FeedCounters::default(), |mut counters, alert| {
        match alert.severity {
            Severity::Critical => counters.critical += 1,
            Severity::Warning => counters.warning += 1,
        }
        counters
    })
}

/// Badge for a severity level. Exhaustive by construction; adding a third
/// severity will not compile until this mapping is extended.
pub fn badge_for(severity: Severity) -> SeverityBadge {
    match severity {
        Severity::Critical => SeverityBadge {
            label: "CRITICAL",
            tone: Tone::Red,
            caption: "Requires immediate action",
        },
        Severity::Warning => SeverityBadge {
            label: "WARNING",
            tone: Tone::Yellow,
            caption: "Monitor closely",
        },
    }
}

/// Assemble the feed from the shared read model.
pub fn build_feed(repo: &dyn AlertRepository) -> Result<AlertFeed, StoreError> {
    let summaries = repo.list_summaries()?;
    let counters = count_by_severity(&summaries);
    let alerts = summaries
        .into_iter()
        .map(|alert| FeedEntry {
            badge: badge_for(alert.severity),
            alert,
        })
        .collect();
    Ok(AlertFeed { counters, alerts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAlertStore;

    fn alert(id: &str, severity: Severity) -> AlertSummary {
        AlertSummary {
            id: id.into(),
            district: "Test".into(),
            severity,
            metric: "Enrollment".into(),
            deviation_percent: 10.0,
            relative_timestamp: "1 hour ago".into(),
        }
    }

    #[test]
    fn counters_on_empty_collection_are_zero() {
        let counters = count_by_severity(&[]);
        assert_eq!(counters, FeedCounters::default());
    }

    #[test]
    fn counters_all_one_type() {
        let alerts = vec![
            alert("1", Severity::Warning),
            alert("2", Severity::Warning),
            alert("3", Severity::Warning),
        ];
        let counters = count_by_severity(&alerts);
        assert_eq!(counters.critical, 0);
        assert_eq!(counters.warning, 3);
    }

    #[test]
    fn reference_feed_counts_three_critical_two_warning() {
        let store = InMemoryAlertStore::with_reference_data();
        let feed = build_feed(&store).unwrap();
        assert_eq!(feed.counters.critical, 3);
        assert_eq!(feed.counters.warning, 2);
        assert_eq!(feed.alerts.len(), 5);

        let critical: Vec<&str> = feed
            .alerts
            .iter()
            .filter(|e| e.alert.severity == Severity::Critical)
            .map(|e| e.alert.district.as_str())
            .collect();
        assert_eq!(critical, ["Bangalore Urban", "Mandya", "Tumakuru"]);
    }

    #[test]
    fn empty_store_builds_empty_feed() {
        let store = InMemoryAlertStore::empty();
        let feed = build_feed(&store).unwrap();
        assert_eq!(feed.counters.critical, 0);
        assert_eq!(feed.counters.warning, 0);
        assert!(feed.alerts.is_empty());
    }

    #[test]
    fn badges_stay_keyed_to_severity() {
        let critical = badge_for(Severity::Critical);
        assert_eq!(critical.label, "CRITICAL");
        assert_eq!(critical.tone, Tone::Red);

        let warning = badge_for(Severity::Warning);
        assert_eq!(warning.label, "WARNING");
        assert_eq!(warning.tone, Tone::Yellow);
        assert_eq!(warning.caption, "Monitor closely");
    }

    #[test]
    fn feed_entry_serializes_flat() {
        let store = InMemoryAlertStore::with_reference_data();
        let feed = build_feed(&store).unwrap();
        let json = serde_json::to_value(&feed.alerts[0]).unwrap();
        assert_eq!(json["district"], "Bangalore Urban");
        assert_eq!(json["badge"]["tone"], "red");
    }
}
