//! Urgency ranking and fleet summary.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Count by tier | Vehicles whose worst tier equals each tier |
//! | Due count | Vehicles at or above the due tier |
//! | Data coverage | Fraction of vehicles with any component data |
//! | Avg lowest percent | Mean of `lowest_percent` over vehicles with data |

use std::cmp::Ordering;
use std::collections::HashMap;

use super::VehicleStatus;
use crate::models::UrgencyTier;

/// Urgency ordering: tier descending, lowest percent ascending
/// (`None` last), then vehicle id.
pub fn urgency_order(a: &VehicleStatus, b: &VehicleStatus) -> Ordering {
    b.worst_tier
        .rank()
        .cmp(&a.worst_tier.rank())
        .then_with(|| match (a.lowest_percent, b.lowest_percent) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.vehicle_id.cmp(&b.vehicle_id))
}

/// Returns the statuses ranked most urgent first.
pub fn rank_by_urgency(statuses: &[VehicleStatus]) -> Vec<VehicleStatus> {
    let mut ranked = statuses.to_vec();
    ranked.sort_by(urgency_order);
    ranked
}

/// Vehicles at or above `min_tier`, ranked. `NoData` vehicles are never due.
pub fn due_vehicles(statuses: &[VehicleStatus], min_tier: UrgencyTier) -> Vec<VehicleStatus> {
    let mut due: Vec<VehicleStatus> = statuses
        .iter()
        .filter(|s| s.is_at_least(min_tier))
        .cloned()
        .collect();
    due.sort_by(urgency_order);
    due
}

/// Fleet-wide maintenance indicators.
#[derive(Debug, Clone)]
pub struct FleetSummary {
    /// Number of vehicles summarized.
    pub vehicle_count: usize,
    /// Vehicles per worst tier.
    pub count_by_tier: HashMap<UrgencyTier, usize>,
    /// Vehicles at or above the due tier.
    pub due_count: usize,
    /// Fraction of vehicles with any component data (0.0..1.0).
    pub data_coverage: f64,
    /// Mean lowest remaining percent over vehicles with data.
    pub avg_lowest_percent: Option<f64>,
}

impl FleetSummary {
    /// Computes the summary; vehicles at or above `due_tier` count as due.
    pub fn calculate(statuses: &[VehicleStatus], due_tier: UrgencyTier) -> Self {
        let mut count_by_tier: HashMap<UrgencyTier, usize> = HashMap::new();
        let mut due_count = 0;
        let mut with_data = 0;
        let mut percent_sum = 0.0;
        let mut percent_count = 0usize;

        for s in statuses {
            *count_by_tier.entry(s.worst_tier).or_insert(0) += 1;
            if s.is_at_least(due_tier) {
                due_count += 1;
            }
            if s.worst_tier.has_data() {
                with_data += 1;
            }
            if let Some(p) = s.lowest_percent {
                percent_sum += p;
                percent_count += 1;
            }
        }

        let data_coverage = if statuses.is_empty() {
            0.0
        } else {
            with_data as f64 / statuses.len() as f64
        };

        let avg_lowest_percent = if percent_count > 0 {
            Some(percent_sum / percent_count as f64)
        } else {
            None
        };

        Self {
            vehicle_count: statuses.len(),
            count_by_tier,
            due_count,
            data_coverage,
            avg_lowest_percent,
        }
    }

    /// Vehicles in `tier`.
    pub fn count(&self, tier: UrgencyTier) -> usize {
        self.count_by_tier.get(&tier).copied().unwrap_or(0)
    }
}
