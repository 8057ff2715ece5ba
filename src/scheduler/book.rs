//! Service schedule: the collection of workshop bookings.
//!
//! Every operation takes the current collection by reference and returns a
//! new one, so each caller works on its own snapshot. Reconciling
//! concurrent writers is left to the persistence layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ScheduledAssignment, Slot};

/// Options for a scheduling action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Open-ended job: active every day from the start date onward.
    pub continuous: bool,
    /// Consecutive slots occupied within the day (`0` is treated as `1`).
    pub duration_slots: u32,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            continuous: false,
            duration_slots: 1,
        }
    }
}

impl ScheduleOptions {
    /// Continuous, single-slot options.
    pub fn continuous() -> Self {
        Self {
            continuous: true,
            ..Self::default()
        }
    }

    /// Sets the number of consecutive slots.
    pub fn with_duration_slots(mut self, slots: u32) -> Self {
        self.duration_slots = slots;
        self
    }
}

/// Places `vehicle_id` into `(date, slot)`, replacing any prior booking.
///
/// Accepts any vehicle id and any date, past ones included.
pub fn schedule(
    assignments: &[ScheduledAssignment],
    vehicle_id: &str,
    date: NaiveDate,
    slot: Slot,
    opts: ScheduleOptions,
) -> Vec<ScheduledAssignment> {
    let mut next = unschedule(assignments, vehicle_id);
    next.push(
        ScheduledAssignment::new(vehicle_id, date, slot)
            .with_duration_slots(opts.duration_slots)
            .with_continuous(opts.continuous),
    );
    debug!(
        vehicle = vehicle_id,
        %date,
        %slot,
        continuous = opts.continuous,
        "scheduled vehicle"
    );
    next
}

/// Removes every booking of `vehicle_id`. No-op when none exists.
pub fn unschedule(
    assignments: &[ScheduledAssignment],
    vehicle_id: &str,
) -> Vec<ScheduledAssignment> {
    let next: Vec<ScheduledAssignment> = assignments
        .iter()
        .filter(|a| a.vehicle_id != vehicle_id)
        .cloned()
        .collect();
    if next.len() != assignments.len() {
        debug!(vehicle = vehicle_id, "removed existing booking");
    }
    next
}

/// Immutable collection of workshop bookings.
///
/// Holds at most one assignment per vehicle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSchedule {
    assignments: Vec<ScheduledAssignment>,
}

impl ServiceSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from stored assignments.
    ///
    /// If the input holds several bookings for one vehicle, the last one wins.
    pub fn from_assignments(assignments: impl IntoIterator<Item = ScheduledAssignment>) -> Self {
        let mut deduped: Vec<ScheduledAssignment> = Vec::new();
        for a in assignments {
            deduped.retain(|existing| existing.vehicle_id != a.vehicle_id);
            deduped.push(a);
        }
        Self {
            assignments: deduped,
        }
    }

    /// Returns a schedule with `vehicle_id` booked into `(date, slot)`.
    pub fn schedule(
        &self,
        vehicle_id: &str,
        date: NaiveDate,
        slot: Slot,
        opts: ScheduleOptions,
    ) -> Self {
        Self {
            assignments: schedule(&self.assignments, vehicle_id, date, slot, opts),
        }
    }

    /// Returns a schedule without any booking for `vehicle_id`.
    pub fn unschedule(&self, vehicle_id: &str) -> Self {
        Self {
            assignments: unschedule(&self.assignments, vehicle_id),
        }
    }

    /// All assignments.
    pub fn assignments(&self) -> &[ScheduledAssignment] {
        &self.assignments
    }

    /// Consumes the schedule, returning its assignments.
    pub fn into_assignments(self) -> Vec<ScheduledAssignment> {
        self.assignments
    }

    /// The booking of a vehicle, if any.
    pub fn assignment_for(&self, vehicle_id: &str) -> Option<&ScheduledAssignment> {
        self.assignments.iter().find(|a| a.vehicle_id == vehicle_id)
    }

    /// Whether a vehicle has a booking.
    pub fn is_scheduled(&self, vehicle_id: &str) -> bool {
        self.assignment_for(vehicle_id).is_some()
    }

    /// Assignments active on `date`, continuous ones included without upper bound.
    pub fn active_on(&self, date: NaiveDate) -> Vec<&ScheduledAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.is_active_on(date))
            .collect()
    }

    /// Assignments occupying `slot` on `date`.
    pub fn occupying(&self, date: NaiveDate, slot: Slot) -> Vec<&ScheduledAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.occupies(date, slot))
            .collect()
    }

    /// Vehicle ids occupying `slot` on `date`.
    pub fn vehicles_in(&self, date: NaiveDate, slot: Slot) -> Vec<&str> {
        self.occupying(date, slot)
            .into_iter()
            .map(|a| a.vehicle_id.as_str())
            .collect()
    }

    /// Continuous (open-ended) assignments.
    pub fn continuous_assignments(&self) -> Vec<&ScheduledAssignment> {
        self.assignments.iter().filter(|a| a.continuous).collect()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Shift, TimeBand};

    const MORNING: Slot = Slot::Shift(Shift::Morning);
    const AFTERNOON: Slot = Slot::Shift(Shift::Afternoon);

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn once() -> ScheduleOptions {
        ScheduleOptions::default()
    }

    #[test]
    fn test_reschedule_keeps_single_assignment() {
        let s = ServiceSchedule::new()
            .schedule("7", day(3), MORNING, once())
            .schedule("7", day(5), AFTERNOON, once());

        assert_eq!(s.len(), 1);
        let a = s.assignment_for("7").unwrap();
        assert_eq!(a.date, day(5));
        assert_eq!(a.slot, AFTERNOON);
    }

    #[test]
    fn test_prior_snapshot_untouched() {
        let empty = ServiceSchedule::new();
        let before = empty.schedule("7", day(3), MORNING, once());
        let after = before.schedule("7", day(4), MORNING, once());
        assert_eq!(before.assignment_for("7").unwrap().date, day(3));
        assert_eq!(after.assignment_for("7").unwrap().date, day(4));
    }

    #[test]
    fn test_slot_holds_many_vehicles() {
        let s = ServiceSchedule::new()
            .schedule("1", day(3), MORNING, once())
            .schedule("2", day(3), MORNING, once())
            .schedule("3", day(3), MORNING, once());
        assert_eq!(s.vehicles_in(day(3), MORNING), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unschedule_missing_is_noop() {
        let s = ServiceSchedule::new();
        let s = s.schedule("1", day(3), MORNING, once());
        let same = s.unschedule("does-not-exist");
        assert_eq!(same, s);

        let cleared = s.unschedule("1");
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_continuous_active_far_future() {
        let band: Slot = TimeBand::H08To10.into();
        let empty = ServiceSchedule::new();
        let s = empty.schedule("9", day(3), band, ScheduleOptions::continuous());
        assert!(s.active_on(day(2)).is_empty());
        assert_eq!(s.active_on(day(3)).len(), 1);
        let far = NaiveDate::from_ymd_opt(2150, 1, 1).unwrap();
        assert_eq!(s.active_on(far).len(), 1);
        assert_eq!(s.vehicles_in(far, band), vec!["9"]);
        assert_eq!(s.continuous_assignments().len(), 1);

        assert!(s.unschedule("9").active_on(far).is_empty());
    }

    #[test]
    fn test_past_dates_and_unknown_ids_accepted() {
        let past = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        let empty = ServiceSchedule::new();
        let s = empty.schedule("ghost", past, AFTERNOON, once());
        assert!(s.is_scheduled("ghost"));
    }

    #[test]
    fn test_multi_slot_booking() {
        let opts = once().with_duration_slots(3);
        let empty = ServiceSchedule::new();
        let s = empty.schedule("4", day(3), TimeBand::H12To14.into(), opts);
        assert!(s.vehicles_in(day(3), TimeBand::H10To12.into()).is_empty());
        assert_eq!(s.vehicles_in(day(3), TimeBand::H16To18.into()), vec!["4"]);
        assert!(s.vehicles_in(day(4), TimeBand::H12To14.into()).is_empty());
    }

    #[test]
    fn test_from_assignments_dedupes() {
        let s = ServiceSchedule::from_assignments(vec![
            ScheduledAssignment::new("1", day(3), MORNING),
            ScheduledAssignment::new("2", day(3), MORNING),
            ScheduledAssignment::new("1", day(4), AFTERNOON),
        ]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.assignment_for("1").unwrap().date, day(4));
    }

    #[test]
    fn test_free_functions() {
        let a = schedule(&[], "7", day(1), MORNING, once());
        let b = schedule(&a, "7", day(2), AFTERNOON, once());
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].date, day(2));
        assert!(unschedule(&b, "7").is_empty());
    }
}
