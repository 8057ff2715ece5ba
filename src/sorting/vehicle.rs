//! Sort columns of the maintenance listings.

use serde::{Deserialize, Serialize};

use super::{SortKey, Sortable};
use crate::aggregation::VehicleStatus;

/// Columns of a vehicle status listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleField {
    /// Vehicle identifier, as text.
    VehicleId,
    /// Worst tier, by rank.
    WorstTier,
    /// Lowest remaining percent (no data sorts as `0`).
    LowestPercent,
    /// Component driving the worst tier, as text.
    WorstComponent,
}

impl Sortable for VehicleStatus {
    type Field = VehicleField;

    fn sort_key(&self, field: VehicleField) -> SortKey {
        match field {
            VehicleField::VehicleId => SortKey::Text(self.vehicle_id.clone()),
            VehicleField::WorstTier => SortKey::Tier(self.worst_tier),
            VehicleField::LowestPercent => SortKey::Number(self.lowest_percent),
            VehicleField::WorstComponent => {
                SortKey::Text(self.worst_component_id.clone().unwrap_or_default())
            }
        }
    }
}
