//! Service slots within a calendar day.
//!
//! Two closed enumerations are in use: half-day shifts and five two-hour
//! time bands. The scheduler only needs slot equality; positions within a
//! family are used for assignments that span consecutive slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-day shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// First half of the working day.
    Morning,
    /// Second half of the working day.
    Afternoon,
}

impl Shift {
    /// Both shifts, in day order.
    pub const ALL: [Shift; 2] = [Shift::Morning, Shift::Afternoon];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
        }
    }
}

/// Two-hour time band between 08:00 and 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeBand {
    #[serde(rename = "08-10")]
    H08To10,
    #[serde(rename = "10-12")]
    H10To12,
    #[serde(rename = "12-14")]
    H12To14,
    #[serde(rename = "14-16")]
    H14To16,
    #[serde(rename = "16-18")]
    H16To18,
}

impl TimeBand {
    /// Every band, in day order.
    pub const ALL: [TimeBand; 5] = [
        TimeBand::H08To10,
        TimeBand::H10To12,
        TimeBand::H12To14,
        TimeBand::H14To16,
        TimeBand::H16To18,
    ];

    /// Display label (`"08-10"` etc.).
    pub fn label(self) -> &'static str {
        match self {
            TimeBand::H08To10 => "08-10",
            TimeBand::H10To12 => "10-12",
            TimeBand::H12To14 => "12-14",
            TimeBand::H14To16 => "14-16",
            TimeBand::H16To18 => "16-18",
        }
    }

    /// Start hour of the band.
    pub fn start_hour(self) -> u32 {
        8 + 2 * self.position() as u32
    }

    fn position(self) -> usize {
        match self {
            TimeBand::H08To10 => 0,
            TimeBand::H10To12 => 1,
            TimeBand::H12To14 => 2,
            TimeBand::H14To16 => 3,
            TimeBand::H16To18 => 4,
        }
    }
}

/// Which enumeration a calling context uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotFamily {
    /// Morning / afternoon.
    #[default]
    Shift,
    /// Five two-hour bands.
    TimeBand,
}

impl SlotFamily {
    /// Every slot of this family, in day order.
    pub fn slots(self) -> Vec<Slot> {
        match self {
            SlotFamily::Shift => Shift::ALL.iter().map(|s| Slot::Shift(*s)).collect(),
            SlotFamily::TimeBand => TimeBand::ALL.iter().map(|b| Slot::Band(*b)).collect(),
        }
    }

    /// Number of slots per day.
    pub fn slots_per_day(self) -> usize {
        match self {
            SlotFamily::Shift => Shift::ALL.len(),
            SlotFamily::TimeBand => TimeBand::ALL.len(),
        }
    }
}

/// A time bucket within a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// A half-day shift.
    Shift(Shift),
    /// A two-hour band.
    Band(TimeBand),
}

impl Slot {
    /// Family this slot belongs to.
    pub fn family(&self) -> SlotFamily {
        match self {
            Slot::Shift(_) => SlotFamily::Shift,
            Slot::Band(_) => SlotFamily::TimeBand,
        }
    }

    /// Zero-based position within the family.
    pub fn position(&self) -> usize {
        match self {
            Slot::Shift(Shift::Morning) => 0,
            Slot::Shift(Shift::Afternoon) => 1,
            Slot::Band(b) => b.position(),
        }
    }

    /// Display label of the underlying shift or band.
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Shift(s) => s.label(),
            Slot::Band(b) => b.label(),
        }
    }
}

impl From<Shift> for Slot {
    fn from(shift: Shift) -> Self {
        Slot::Shift(shift)
    }
}

impl From<TimeBand> for Slot {
    fn from(band: TimeBand) -> Self {
        Slot::Band(band)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_slots() {
        assert_eq!(SlotFamily::Shift.slots().len(), 2);
        let bands = SlotFamily::TimeBand.slots();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0], Slot::Band(TimeBand::H08To10));
        assert_eq!(bands[4].label(), "16-18");
    }

    #[test]
    fn test_positions() {
        for (i, slot) in SlotFamily::TimeBand.slots().iter().enumerate() {
            assert_eq!(slot.position(), i);
        }
        assert_eq!(Slot::from(Shift::Afternoon).position(), 1);
    }

    #[test]
    fn test_band_start_hour() {
        assert_eq!(TimeBand::H08To10.start_hour(), 8);
        assert_eq!(TimeBand::H16To18.start_hour(), 16);
    }

    #[test]
    fn test_slot_equality_across_families() {
        // Same position, different family: not the same slot.
        assert_ne!(Slot::Shift(Shift::Morning), Slot::Band(TimeBand::H08To10));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Shift::Afternoon.label(), "Afternoon");
        assert_eq!(TimeBand::H08To10.label(), "08-10");
        assert_eq!(Slot::from(Shift::Morning).to_string(), "Morning");
    }

    #[test]
    fn test_slot_serde() {
        let band = Slot::Band(TimeBand::H12To14);
        let json = serde_json::to_string(&band).unwrap();
        assert_eq!(json, r#"{"band":"12-14"}"#);
        let slot: Slot = serde_json::from_str(r#"{"shift":"morning"}"#).unwrap();
        assert_eq!(slot, Slot::Shift(Shift::Morning));
    }
}
