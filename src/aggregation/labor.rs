//! Workshop time estimate for the maintenance-due listing.
//!
//! A presentation heuristic over the aggregated lowest percent. Kept apart
//! from the aggregator so changing the buckets never alters tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse labor-duration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborEstimate {
    /// `≤ 1%`: full service.
    FullService,
    /// `≤ 3%`: oil and filters.
    OilAndFilters,
    /// Otherwise: oil only.
    OilOnly,
}

impl LaborEstimate {
    /// Display label with the expected hours.
    pub fn label(self) -> &'static str {
        match self {
            LaborEstimate::FullService => "4-6h full service",
            LaborEstimate::OilAndFilters => "3-4h oil+filters",
            LaborEstimate::OilOnly => "2-3h oil only",
        }
    }

    /// Two-hour bands to book for this estimate (upper bound of the range).
    pub fn time_bands(self) -> u32 {
        match self {
            LaborEstimate::FullService => 3,
            LaborEstimate::OilAndFilters => 2,
            LaborEstimate::OilOnly => 2,
        }
    }
}

impl fmt::Display for LaborEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a remaining percent onto a labor bucket.
pub fn estimate_labor(percent: f64) -> LaborEstimate {
    if percent <= 1.0 {
        LaborEstimate::FullService
    } else if percent <= 3.0 {
        LaborEstimate::OilAndFilters
    } else {
        LaborEstimate::OilOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        assert_eq!(estimate_labor(0.0), LaborEstimate::FullService);
        assert_eq!(estimate_labor(1.0), LaborEstimate::FullService);
        assert_eq!(estimate_labor(1.5), LaborEstimate::OilAndFilters);
        assert_eq!(estimate_labor(3.0), LaborEstimate::OilAndFilters);
        assert_eq!(estimate_labor(5.0), LaborEstimate::OilOnly);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LaborEstimate::FullService.to_string(), "4-6h full service");
        assert_eq!(LaborEstimate::OilAndFilters.label(), "3-4h oil+filters");
        assert_eq!(LaborEstimate::OilOnly.label(), "2-3h oil only");
    }

    #[test]
    fn test_time_bands_cover_upper_bound() {
        for estimate in [
            LaborEstimate::FullService,
            LaborEstimate::OilAndFilters,
            LaborEstimate::OilOnly,
        ] {
            let hours = estimate.time_bands() * 2;
            assert!(hours >= 4);
        }
        assert_eq!(LaborEstimate::FullService.time_bands(), 3);
    }
}
