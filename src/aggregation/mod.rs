//! Vehicle aggregation, labor estimates, and urgency ranking.
//!
//! Combines per-component evaluations into one worst-case status per
//! vehicle, then ranks and summarizes the fleet.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use fleet_maintenance::aggregation::{aggregate, estimate_labor, LaborEstimate};
//! use fleet_maintenance::evaluation::{EvaluationRules, PolicyPreset};
//! use fleet_maintenance::models::{ComponentCheckpoint, UrgencyTier, UsageSnapshot};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let usage = UsageSnapshot::new("V7", today).with_distance(99_500.0);
//! let checkpoints = vec![ComponentCheckpoint::distance("aceite_motor", 90_000.0)];
//!
//! let status = aggregate(
//!     &usage,
//!     &checkpoints,
//!     &PolicyPreset::maintenance_due(),
//!     &EvaluationRules::default(),
//! );
//! assert_eq!(status.worst_tier, UrgencyTier::Critical);
//! assert_eq!(estimate_labor(status.lowest_percent.unwrap()), LaborEstimate::OilOnly);
//! ```

mod aggregator;
mod labor;
mod ranking;

pub use aggregator::{aggregate, VehicleStatus};
pub use labor::{estimate_labor, LaborEstimate};
pub use ranking::{due_vehicles, rank_by_urgency, urgency_order, FleetSummary};
