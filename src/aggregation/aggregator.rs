//! Per-vehicle worst-case aggregation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::evaluation::{evaluate_with, Evaluation, EvaluationRules, TierPolicy};
use crate::models::{components, ComponentCheckpoint, UrgencyTier, UsageSnapshot};

/// Overall maintenance status of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleStatus {
    /// Vehicle identifier.
    pub vehicle_id: String,
    /// Most urgent tier across all components.
    pub worst_tier: UrgencyTier,
    /// Component responsible for `worst_tier`. `None` when no component has data.
    pub worst_component_id: Option<String>,
    /// Lowest remaining percent across components with data.
    pub lowest_percent: Option<f64>,
    /// Per-component evaluations, in input order.
    pub evaluations: Vec<Evaluation>,
    /// Human-readable explanation of the status.
    pub reason: String,
}

impl VehicleStatus {
    /// Remaining percent per component (`None` = no data).
    pub fn percents_by_component(&self) -> BTreeMap<String, Option<f64>> {
        self.evaluations
            .iter()
            .map(|e| (e.component_id.clone(), e.remaining_percent))
            .collect()
    }

    /// Evaluation of a given component.
    pub fn evaluation_for(&self, component_id: &str) -> Option<&Evaluation> {
        self.evaluations
            .iter()
            .find(|e| e.component_id == component_id)
    }

    /// Whether the vehicle reaches at least `tier` (never true for `NoData`).
    pub fn is_at_least(&self, tier: UrgencyTier) -> bool {
        self.worst_tier.has_data() && self.worst_tier.at_least(tier)
    }
}

/// Aggregates all component evaluations of a vehicle into one status.
///
/// The overall tier is the most urgent component tier. Among equally urgent
/// components the fixed display priority (oil by distance, oil by hours,
/// then the rest) picks the one reported, then input order.
pub fn aggregate<P: TierPolicy + ?Sized>(
    usage: &UsageSnapshot,
    checkpoints: &[ComponentCheckpoint],
    policy: &P,
    rules: &EvaluationRules,
) -> VehicleStatus {
    let evaluations: Vec<Evaluation> = checkpoints
        .iter()
        .map(|cp| evaluate_with(cp, usage, policy, rules))
        .collect();

    let worst = evaluations
        .iter()
        .enumerate()
        .filter(|(_, e)| e.tier.has_data())
        .min_by(|(ia, a), (ib, b)| {
            b.tier
                .rank()
                .cmp(&a.tier.rank())
                .then_with(|| {
                    components::display_priority(&a.component_id)
                        .cmp(&components::display_priority(&b.component_id))
                })
                .then_with(|| ia.cmp(ib))
        })
        .map(|(_, e)| e);

    let lowest_percent = evaluations
        .iter()
        .filter_map(|e| e.remaining_percent)
        .min_by(|a, b| a.total_cmp(b));

    let (worst_tier, worst_component_id, reason) = match worst {
        Some(e) => (e.tier, Some(e.component_id.clone()), describe(e)),
        None => {
            debug!(
                vehicle = %usage.vehicle_id,
                components = checkpoints.len(),
                "no component produced data"
            );
            (UrgencyTier::NoData, None, "no maintenance data".to_string())
        }
    };

    VehicleStatus {
        vehicle_id: usage.vehicle_id.clone(),
        worst_tier,
        worst_component_id,
        lowest_percent,
        evaluations,
        reason,
    }
}

fn describe(e: &Evaluation) -> String {
    let percent = e.remaining_percent.unwrap_or(0.0);
    match e.remaining_units {
        Some(units) if units < 0.0 => format!(
            "{}: overdue by {:.0} {}",
            e.component_id,
            -units,
            e.counter_kind.unit()
        ),
        _ => format!("{}: {:.1}% remaining", e.component_id, percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluate;
    use crate::evaluation::policies::{DueCutoff, ThreeTier};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn rules() -> EvaluationRules {
        EvaluationRules::default()
    }

    fn fleet_checkpoints() -> Vec<ComponentCheckpoint> {
        vec![
            ComponentCheckpoint::calendar(
                components::MONTHLY_INSPECTION,
                NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            ),
            ComponentCheckpoint::distance(components::OIL_BY_DISTANCE, 90_000.0),
            ComponentCheckpoint::hours(components::OIL_BY_HOURS, 1_000.0)
                .with_interval(250.0),
        ]
    }

    #[test]
    fn test_worst_tier_wins() {
        let usage = UsageSnapshot::new("V7", today())
            .with_distance(99_500.0) // 5% → Critical
            .with_hours(1_100.0); // 60% → Ok
        let cps = fleet_checkpoints();
        let status = aggregate(&usage, &cps, &ThreeTier::default(), &rules());
        assert_eq!(status.worst_tier, UrgencyTier::Critical);
        assert_eq!(status.worst_component_id.as_deref(), Some("aceite_motor"));
        assert_eq!(status.lowest_percent, Some(5.0));
        assert_eq!(status.reason, "aceite_motor: 5.0% remaining");
    }

    #[test]
    fn test_worst_tier_matches_component_maximum() {
        let usage = UsageSnapshot::new("V7", today())
            .with_distance(97_500.0)
            .with_hours(1_240.0);
        let policy = ThreeTier::default();
        let cps = fleet_checkpoints();
        let status = aggregate(&usage, &cps, &policy, &rules());

        let expected = cps
            .iter()
            .map(|cp| evaluate(cp, &usage, &policy).tier)
            .max()
            .unwrap();
        assert_eq!(status.worst_tier, expected);
    }

    #[test]
    fn test_tie_broken_by_display_priority() {
        // Both oil components at 2% → Critical under DueCutoff; distance reported.
        let usage = UsageSnapshot::new("V7", today())
            .with_distance(99_800.0)
            .with_hours(1_245.0);
        let cps = vec![
            ComponentCheckpoint::hours(components::OIL_BY_HOURS, 1_000.0)
                .with_interval(250.0),
            ComponentCheckpoint::distance(components::OIL_BY_DISTANCE, 90_000.0),
        ];
        let status = aggregate(&usage, &cps, &DueCutoff::default(), &rules());
        assert_eq!(status.worst_tier, UrgencyTier::Critical);
        assert_eq!(status.worst_component_id.as_deref(), Some("aceite_motor"));
    }

    #[test]
    fn test_no_components_is_no_data() {
        let usage = UsageSnapshot::new("V7", today()).with_distance(10_000.0);
        let status = aggregate(&usage, &[], &ThreeTier::default(), &rules());
        assert_eq!(status.worst_tier, UrgencyTier::NoData);
        assert!(status.worst_component_id.is_none());
        assert!(status.lowest_percent.is_none());
        assert_eq!(status.reason, "no maintenance data");
    }

    #[test]
    fn test_all_no_data() {
        let usage = UsageSnapshot::new("V7", today()); // no counters
        let cps = vec![
            ComponentCheckpoint::distance(components::OIL_BY_DISTANCE, 90_000.0),
            ComponentCheckpoint::hours(components::OIL_BY_HOURS, 1_000.0),
        ];
        let status = aggregate(&usage, &cps, &ThreeTier::default(), &rules());
        assert_eq!(status.worst_tier, UrgencyTier::NoData);
        assert!(!status.is_at_least(UrgencyTier::NoData));
    }

    #[test]
    fn test_percents_by_component() {
        let usage = UsageSnapshot::new("V7", today()).with_distance(95_000.0);
        let cps = fleet_checkpoints();
        let status = aggregate(&usage, &cps, &ThreeTier::default(), &rules());
        let percents = status.percents_by_component();
        assert_eq!(percents["aceite_motor"], Some(50.0));
        assert_eq!(percents["aceite_motor_horas"], None);
        assert!(percents["revision_mensual"].is_some());
        assert_eq!(status.evaluations.len(), 3);
    }

    #[test]
    fn test_overdue_reason() {
        let usage = UsageSnapshot::new("V7", today()).with_distance(101_200.0);
        let oil = ComponentCheckpoint::distance(components::OIL_BY_DISTANCE, 90_000.0);
        let cps = vec![oil];
        let status = aggregate(&usage, &cps, &ThreeTier::default(), &rules());
        assert_eq!(status.reason, "aceite_motor: overdue by 1200 km");
    }
}
