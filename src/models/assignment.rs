//! Scheduled service assignment.
//!
//! Records that a vehicle is booked into a slot on a given day. Slots are
//! capacity-unbounded buckets: the only exclusivity is one active
//! assignment per vehicle, enforced by the scheduler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Slot;

/// A vehicle placed into a calendar slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAssignment {
    /// Booked vehicle.
    pub vehicle_id: String,
    /// Day of the booking (start day for continuous work).
    pub date: NaiveDate,
    /// First slot occupied.
    pub slot: Slot,
    /// Consecutive slots occupied within the day, starting at `slot` (≥ 1).
    pub duration_slots: u32,
    /// Open-ended: occupies the same slots every day from `date` onward.
    pub continuous: bool,
}

impl ScheduledAssignment {
    /// Creates a single-slot, single-day assignment.
    pub fn new(vehicle_id: impl Into<String>, date: NaiveDate, slot: Slot) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            date,
            slot,
            duration_slots: 1,
            continuous: false,
        }
    }

    /// Sets the number of consecutive slots (`0` is treated as `1`).
    pub fn with_duration_slots(mut self, slots: u32) -> Self {
        self.duration_slots = slots.max(1);
        self
    }

    /// Marks the assignment as continuous.
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Whether the assignment is active on `date`.
    ///
    /// Continuous assignments have no end date: every day on or after the
    /// start date is active.
    #[inline]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if self.continuous {
            date >= self.date
        } else {
            date == self.date
        }
    }

    /// Whether the assignment covers `slot` (ignoring the date).
    pub fn covers_slot(&self, slot: Slot) -> bool {
        if slot.family() != self.slot.family() {
            return false;
        }
        let start = self.slot.position();
        let end = start + self.duration_slots.max(1) as usize;
        (start..end).contains(&slot.position())
    }

    /// Whether the assignment occupies `slot` on `date`.
    #[inline]
    pub fn occupies(&self, date: NaiveDate, slot: Slot) -> bool {
        self.is_active_on(date) && self.covers_slot(slot)
    }
}
