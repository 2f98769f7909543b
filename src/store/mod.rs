//! Repository abstraction shared by every view.
//!
//! All views read through `AlertRepository` so the feed counters, dashboard
//! cards, and detail records come from one read model instead of per-view
//! copies. The current backing store is fixed in-memory reference data
//! (`memory::InMemoryAlertStore`); a wired backend slots in behind the same
//! trait.

pub mod memory;

pub use memory::InMemoryAlertStore;

use thiserror::Error;

use crate::models::{
    Ack, AgeGroupBand, AlertAction, AlertDetail, AlertSummary, DistrictStatusRow, OfficerProfile,
    ReferenceStats, TrendPoint,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Update conflict: {0}")]
    Conflict(String),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Read model and status-update sink for the alert system.
///
/// Object safe so `CoreState` can hold it as `Arc<dyn AlertRepository>`.
pub trait AlertRepository: Send + Sync {
    /// Ordered alert feed.
    fn list_summaries(&self) -> Result<Vec<AlertSummary>, StoreError>;

    /// Extended record for one alert.
    ///
    /// Unknown ids fall back to the record for `config::FALLBACK_ALERT_ID`
    /// rather than failing; `NotFound` is only possible when the store has
    /// no fallback record either.
    fn get_detail(&self, id: &str) -> Result<AlertDetail, StoreError>;

    /// Record a terminal action taken on an alert.
    fn update_status(
        &self,
        id: &str,
        action: AlertAction,
        note: &str,
    ) -> Result<Ack, StoreError>;

    /// District status table for the dashboard.
    fn district_statuses(&self) -> Result<Vec<DistrictStatusRow>, StoreError>;

    /// Regional 6-month trend series (not keyed by alert).
    fn trend_series(&self) -> Result<Vec<TrendPoint>, StoreError>;

    /// Regional age-group breakdown (not keyed by alert).
    fn age_breakdown(&self) -> Result<Vec<AgeGroupBand>, StoreError>;

    /// The signed-in officer's record.
    fn officer_profile(&self) -> Result<OfficerProfile, StoreError>;

    /// Regional stats the dashboard cannot derive from the feed.
    fn reference_stats(&self) -> Result<ReferenceStats, StoreError>;
}
