//! Policy-free remaining-life computation.
//!
//! # Formula
//!
//! ```text
//! used      = current - last_service          (distance, hours)
//!           = days(as_of - last_service_date) (calendar, floored)
//! remaining = interval - used
//! percent   = clamp(remaining * 100 / interval, 0, 100)
//! ```
//!
//! Missing counters, a kind/value mismatch, or a non-positive interval
//! yield `None` rather than an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::TierPolicy;
use crate::models::{ComponentCheckpoint, CounterKind, UrgencyTier, UsageSnapshot};

/// Input-interpretation switches for the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRules {
    /// Treat a `0` counter reading (current or last service) as unknown.
    ///
    /// Matches the listings that guard on falsy counters. Disable when the
    /// data source distinguishes "unset" from a genuine zero reading.
    #[serde(default = "default_zero_is_unset")]
    pub zero_is_unset: bool,
}

fn default_zero_is_unset() -> bool {
    true
}

impl Default for EvaluationRules {
    fn default() -> Self {
        Self {
            zero_is_unset: default_zero_is_unset(),
        }
    }
}

impl EvaluationRules {
    /// Rules that accept `0` as a real reading.
    pub fn strict_zero() -> Self {
        Self {
            zero_is_unset: false,
        }
    }
}

/// Remaining life of one component, before classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeReading {
    /// Counter the interval is measured in.
    pub counter_kind: CounterKind,
    /// Remaining life as a percentage of the interval, in `[0, 100]`.
    pub percent: f64,
    /// Remaining km / hours / days, unclamped (negative = overdue).
    pub remaining_units: f64,
    /// Effective interval used.
    pub interval: f64,
}

impl LifeReading {
    /// Whether the component is past its interval.
    pub fn is_overdue(&self) -> bool {
        self.remaining_units < 0.0
    }
}

/// Result of evaluating one component against a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Evaluated component.
    pub component_id: String,
    /// Counter kind of the component.
    pub counter_kind: CounterKind,
    /// Remaining life percentage. `None` = no data.
    pub remaining_percent: Option<f64>,
    /// Remaining km / hours / days (negative = overdue). `None` = no data.
    pub remaining_units: Option<f64>,
    /// Urgency tier under the policy used.
    pub tier: UrgencyTier,
}

impl Evaluation {
    fn no_data(checkpoint: &ComponentCheckpoint) -> Self {
        Self {
            component_id: checkpoint.component_id.clone(),
            counter_kind: checkpoint.counter_kind,
            remaining_percent: None,
            remaining_units: None,
            tier: UrgencyTier::NoData,
        }
    }
}

/// Computes the remaining life of a component.
///
/// Returns `None` when the inputs do not allow a numeric result.
pub fn life_reading(
    checkpoint: &ComponentCheckpoint,
    usage: &UsageSnapshot,
    rules: &EvaluationRules,
) -> Option<LifeReading> {
    let Some(interval) = checkpoint.effective_interval() else {
        debug!(
            component = %checkpoint.component_id,
            vehicle = %usage.vehicle_id,
            "no interval configured"
        );
        return None;
    };
    if !interval.is_finite() || interval <= 0.0 {
        debug!(
            component = %checkpoint.component_id,
            vehicle = %usage.vehicle_id,
            interval,
            "non-positive interval"
        );
        return None;
    }

    let used = match checkpoint.counter_kind {
        CounterKind::Distance => counter_delta(
            usage.current_distance,
            checkpoint.last_service.and_then(|p| p.as_counter()),
            rules,
        ),
        CounterKind::Hours => counter_delta(
            usage.current_hours,
            checkpoint.last_service.and_then(|p| p.as_counter()),
            rules,
        ),
        CounterKind::CalendarDays => checkpoint
            .last_service
            .and_then(|p| p.as_date())
            .map(|last| (usage.as_of - last).num_days() as f64),
    };

    let Some(used) = used else {
        debug!(
            component = %checkpoint.component_id,
            vehicle = %usage.vehicle_id,
            "missing counter reading"
        );
        return None;
    };

    let remaining = interval - used;
    let percent = (remaining * 100.0 / interval).clamp(0.0, 100.0);

    trace!(
        component = %checkpoint.component_id,
        vehicle = %usage.vehicle_id,
        used,
        remaining,
        percent,
        "evaluated component"
    );

    Some(LifeReading {
        counter_kind: checkpoint.counter_kind,
        percent,
        remaining_units: remaining,
        interval,
    })
}

fn counter_delta(current: Option<f64>, last: Option<f64>, rules: &EvaluationRules) -> Option<f64> {
    let current = known_counter(current, rules)?;
    let last = known_counter(last, rules)?;
    Some(current - last)
}

fn known_counter(value: Option<f64>, rules: &EvaluationRules) -> Option<f64> {
    value.filter(|v| v.is_finite() && !(rules.zero_is_unset && *v == 0.0))
}

/// Remaining life percentage of a component, without classification.
pub fn remaining_percent(
    checkpoint: &ComponentCheckpoint,
    usage: &UsageSnapshot,
    rules: &EvaluationRules,
) -> Option<f64> {
    life_reading(checkpoint, usage, rules).map(|r| r.percent)
}

/// Evaluates a component and classifies it with `policy`.
///
/// Uses the default [`EvaluationRules`]; see [`evaluate_with`] to override.
pub fn evaluate<P: TierPolicy + ?Sized>(
    checkpoint: &ComponentCheckpoint,
    usage: &UsageSnapshot,
    policy: &P,
) -> Evaluation {
    evaluate_with(checkpoint, usage, policy, &EvaluationRules::default())
}

/// Evaluates a component with explicit input rules.
pub fn evaluate_with<P: TierPolicy + ?Sized>(
    checkpoint: &ComponentCheckpoint,
    usage: &UsageSnapshot,
    policy: &P,
    rules: &EvaluationRules,
) -> Evaluation {
    match life_reading(checkpoint, usage, rules) {
        Some(reading) => Evaluation {
            component_id: checkpoint.component_id.clone(),
            counter_kind: checkpoint.counter_kind,
            remaining_percent: Some(reading.percent),
            remaining_units: Some(reading.remaining_units),
            tier: policy.classify(&reading),
        },
        None => Evaluation::no_data(checkpoint),
    }
}
