//! Vehicle usage snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current counters of a vehicle at evaluation time.
///
/// Owned by the caller; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Vehicle identifier.
    pub vehicle_id: String,
    /// Current odometer reading. `None` = unknown.
    pub current_distance: Option<f64>,
    /// Current engine-hours reading. `None` = unknown.
    pub current_hours: Option<f64>,
    /// Date the counters were read ("today" for calendar components).
    pub as_of: NaiveDate,
}

impl UsageSnapshot {
    /// Creates a snapshot with no counters.
    pub fn new(vehicle_id: impl Into<String>, as_of: NaiveDate) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            current_distance: None,
            current_hours: None,
            as_of,
        }
    }

    /// Sets the odometer reading.
    pub fn with_distance(mut self, km: f64) -> Self {
        self.current_distance = Some(km);
        self
    }

    /// Sets the engine-hours reading.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.current_hours = Some(hours);
        self
    }
}
