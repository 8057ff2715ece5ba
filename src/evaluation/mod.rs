//! Threshold evaluation and urgency classification.
//!
//! Splits the work in two: a policy-free evaluator computes how much of a
//! component's service interval remains, and a [`TierPolicy`] maps that
//! reading onto an [`UrgencyTier`]. Listings that need different cutoffs
//! share the arithmetic and swap the policy.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use fleet_maintenance::evaluation::{evaluate, policies};
//! use fleet_maintenance::models::{ComponentCheckpoint, UrgencyTier, UsageSnapshot};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let oil = ComponentCheckpoint::distance("aceite_motor", 90_000.0).with_interval(10_000.0);
//! let usage = UsageSnapshot::new("V7", today).with_distance(99_500.0);
//!
//! let e = evaluate(&oil, &usage, &policies::DueCutoff::default());
//! assert_eq!(e.remaining_percent, Some(5.0));
//! assert_eq!(e.tier, UrgencyTier::Critical);
//! ```

mod evaluator;
pub mod policies;

pub use evaluator::{
    evaluate, evaluate_with, life_reading, remaining_percent, Evaluation, EvaluationRules,
    LifeReading,
};
pub use policies::PolicyPreset;

use crate::models::UrgencyTier;
use std::fmt::Debug;

/// Maps a remaining-life reading onto an urgency tier.
///
/// Only called when a reading exists; missing data is always
/// [`UrgencyTier::NoData`] regardless of policy.
pub trait TierPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "DUE_CUTOFF").
    fn name(&self) -> &'static str;

    /// Classifies a reading.
    fn classify(&self, reading: &LifeReading) -> UrgencyTier;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Checks the policy's thresholds.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
