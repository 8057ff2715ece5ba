//! Urgency tiers.
//!
//! Tiers are totally ordered by urgency: `Critical > High > Attention > Ok > NoData`.
//! `NoData` ranks below `Ok` so that a vehicle with unknown counters never
//! hides a vehicle that is actually due.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordered classification of how close a component is to requiring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// Counters missing or unusable; no percentage could be computed.
    #[default]
    NoData,
    /// Within its service interval.
    Ok,
    /// Approaching service (`Medium` on some listings).
    Attention,
    /// Service imminent.
    High,
    /// Service due or overdue.
    Critical,
}

impl UrgencyTier {
    /// All tiers, least urgent first.
    pub const ALL: [UrgencyTier; 5] = [
        UrgencyTier::NoData,
        UrgencyTier::Ok,
        UrgencyTier::Attention,
        UrgencyTier::High,
        UrgencyTier::Critical,
    ];

    /// Rank index used for comparisons (higher = more urgent).
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            UrgencyTier::NoData => 0,
            UrgencyTier::Ok => 1,
            UrgencyTier::Attention => 2,
            UrgencyTier::High => 3,
            UrgencyTier::Critical => 4,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            UrgencyTier::NoData => "no data",
            UrgencyTier::Ok => "ok",
            UrgencyTier::Attention => "attention",
            UrgencyTier::High => "high",
            UrgencyTier::Critical => "critical",
        }
    }

    /// Whether a percentage was available for this classification.
    #[inline]
    pub fn has_data(self) -> bool {
        self != UrgencyTier::NoData
    }

    /// Whether this tier is at least as urgent as `other`.
    #[inline]
    pub fn at_least(self, other: UrgencyTier) -> bool {
        self.rank() >= other.rank()
    }

    /// The more urgent of two tiers.
    #[inline]
    pub fn worst(self, other: UrgencyTier) -> UrgencyTier {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }
}

impl PartialOrd for UrgencyTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UrgencyTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
