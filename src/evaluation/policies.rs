//! Built-in tier policies.
//!
//! # Presets
//!
//! | Preset | Used by | Rule |
//! |--------|---------|------|
//! | `DueCutoff` | maintenance-due listing | `≤ 5% → Critical`, else `Ok` |
//! | `ThreeTier` | tire and inspection listings | `≥ 30% → Ok`, `10–30% → Attention`, `< 10% → Critical` |
//! | `Graded` | labor planning | `≤ 1%` (or `≤ 3` days) `→ Critical`, `≤ 3% → High`, `≤ 10% → Attention` |
//!
//! Note the boundary conventions differ: `DueCutoff` and `Graded` are
//! inclusive (`≤`), `ThreeTier` is exclusive below its thresholds (`<`).

use serde::{Deserialize, Serialize};

use super::{LifeReading, TierPolicy};
use crate::models::{CounterKind, UrgencyTier};

/// Binary "is it due" policy.
///
/// A component at or below `cutoff_percent` is listed as due (`Critical`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DueCutoff {
    /// Inclusive cutoff (default: 5.0).
    pub cutoff_percent: f64,
}

impl Default for DueCutoff {
    fn default() -> Self {
        Self {
            cutoff_percent: 5.0,
        }
    }
}

impl DueCutoff {
    /// Creates the policy with a custom inclusive cutoff.
    pub fn with_cutoff(cutoff_percent: f64) -> Self {
        Self { cutoff_percent }
    }
}

impl TierPolicy for DueCutoff {
    fn name(&self) -> &'static str {
        "DUE_CUTOFF"
    }

    fn classify(&self, reading: &LifeReading) -> UrgencyTier {
        if reading.percent <= self.cutoff_percent {
            UrgencyTier::Critical
        } else {
            UrgencyTier::Ok
        }
    }

    fn description(&self) -> &'static str {
        "Due at or below a single percentage cutoff"
    }

    fn validate(&self) -> Result<(), String> {
        check_percent("cutoff_percent", self.cutoff_percent)
    }
}

/// Three-tier traffic-light policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreeTier {
    /// Below this percent the component needs attention (default: 30.0).
    pub attention_below: f64,
    /// Below this percent the component is critical (default: 10.0).
    pub critical_below: f64,
}

impl Default for ThreeTier {
    fn default() -> Self {
        Self {
            attention_below: 30.0,
            critical_below: 10.0,
        }
    }
}

impl TierPolicy for ThreeTier {
    fn name(&self) -> &'static str {
        "THREE_TIER"
    }

    fn classify(&self, reading: &LifeReading) -> UrgencyTier {
        if reading.percent >= self.attention_below {
            UrgencyTier::Ok
        } else if reading.percent >= self.critical_below {
            UrgencyTier::Attention
        } else {
            UrgencyTier::Critical
        }
    }

    fn description(&self) -> &'static str {
        "Ok / Attention / Critical by remaining percent"
    }

    fn validate(&self) -> Result<(), String> {
        check_percent("attention_below", self.attention_below)?;
        check_percent("critical_below", self.critical_below)?;
        if self.critical_below > self.attention_below {
            return Err(format!(
                "critical_below ({}) must not exceed attention_below ({})",
                self.critical_below, self.attention_below
            ));
        }
        Ok(())
    }
}

/// Four-level graded policy.
///
/// Calendar-based components are also critical when `critical_days` or
/// fewer days remain, even if the percentage is above `critical_at`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Graded {
    /// Inclusive critical threshold (default: 1.0).
    pub critical_at: f64,
    /// Inclusive high threshold (default: 3.0).
    pub high_at: f64,
    /// Inclusive attention threshold (default: 10.0).
    pub attention_at: f64,
    /// Remaining days at or below which calendar components are critical (default: 3).
    pub critical_days: f64,
}

impl Default for Graded {
    fn default() -> Self {
        Self {
            critical_at: 1.0,
            high_at: 3.0,
            attention_at: 10.0,
            critical_days: 3.0,
        }
    }
}

impl TierPolicy for Graded {
    fn name(&self) -> &'static str {
        "GRADED"
    }

    fn classify(&self, reading: &LifeReading) -> UrgencyTier {
        let days_critical = reading.counter_kind == CounterKind::CalendarDays
            && reading.remaining_units <= self.critical_days;

        if reading.percent <= self.critical_at || days_critical {
            UrgencyTier::Critical
        } else if reading.percent <= self.high_at {
            UrgencyTier::High
        } else if reading.percent <= self.attention_at {
            UrgencyTier::Attention
        } else {
            UrgencyTier::Ok
        }
    }

    fn description(&self) -> &'static str {
        "Critical / High / Attention / Ok with a calendar-day floor"
    }

    fn validate(&self) -> Result<(), String> {
        check_percent("critical_at", self.critical_at)?;
        check_percent("high_at", self.high_at)?;
        check_percent("attention_at", self.attention_at)?;
        if !(self.critical_at <= self.high_at && self.high_at <= self.attention_at) {
            return Err(format!(
                "thresholds must satisfy critical_at <= high_at <= attention_at (got {}, {}, {})",
                self.critical_at, self.high_at, self.attention_at
            ));
        }
        if !self.critical_days.is_finite() || self.critical_days < 0.0 {
            return Err(format!(
                "critical_days must be >= 0 (got {})",
                self.critical_days
            ));
        }
        Ok(())
    }
}

/// A named policy preset, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "preset", rename_all = "snake_case")]
pub enum PolicyPreset {
    /// Single cutoff (`"preset": "due_cutoff"`).
    DueCutoff(DueCutoff),
    /// Traffic light (`"preset": "three_tier"`).
    ThreeTier(ThreeTier),
    /// Four levels with a calendar-day floor (`"preset": "graded"`).
    Graded(Graded),
}

impl PolicyPreset {
    /// The maintenance-due listing preset (`≤ 5%`).
    pub fn maintenance_due() -> Self {
        PolicyPreset::DueCutoff(DueCutoff::default())
    }

    /// The tire / inspection listing preset (30% / 10%).
    pub fn traffic_light() -> Self {
        PolicyPreset::ThreeTier(ThreeTier::default())
    }

    /// The graded labor-planning preset (1% / 3% / 10%, 3 days).
    pub fn graded() -> Self {
        PolicyPreset::Graded(Graded::default())
    }

    fn inner(&self) -> &dyn TierPolicy {
        match self {
            PolicyPreset::DueCutoff(p) => p,
            PolicyPreset::ThreeTier(p) => p,
            PolicyPreset::Graded(p) => p,
        }
    }
}

impl TierPolicy for PolicyPreset {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn classify(&self, reading: &LifeReading) -> UrgencyTier {
        self.inner().classify(reading)
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }

    fn validate(&self) -> Result<(), String> {
        self.inner().validate()
    }
}

fn check_percent(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{field} must be within [0, 100] (got {value})"))
    }
}
