//! Week window and calendar grid.
//!
//! Weeks start on Monday (ISO 8601). The grid is a display helper: it
//! reads the schedule, it never changes it.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::ServiceSchedule;
use crate::models::Slot;

/// The seven days (Monday first) of the ISO week containing `anchor`.
///
/// Days past the representable range saturate at `NaiveDate::MAX`.
pub fn week_window(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = week_start(anchor);
    std::array::from_fn(|i| add_days(monday, i as i64))
}

/// Monday of the ISO week containing `anchor`.
///
/// Saturates at `NaiveDate::MIN` when that Monday is not representable.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    let offset = anchor.weekday().num_days_from_monday() as i64;
    add_days(anchor, -offset)
}

/// Moves `anchor` by a whole number of weeks (negative = backwards).
///
/// Saturates at `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn shift_week(anchor: NaiveDate, weeks: i64) -> NaiveDate {
    Duration::try_weeks(weeks)
        .and_then(|d| anchor.checked_add_signed(d))
        .unwrap_or_else(|| saturated(weeks))
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|d| date.checked_add_signed(d))
        .unwrap_or_else(|| saturated(days))
}

fn saturated(direction: i64) -> NaiveDate {
    if direction < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    }
}

/// One day × slot cell of the week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Day of the cell.
    pub date: NaiveDate,
    /// Slot of the cell.
    pub slot: Slot,
    /// Vehicles occupying the cell, in booking order.
    pub vehicle_ids: Vec<String>,
}

/// A week of the workshop calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGrid {
    /// Monday-first days of the week.
    pub days: [NaiveDate; 7],
    /// Slots shown per day, in display order.
    pub slots: Vec<Slot>,
    /// Cells, day-major: `cells[day * slots.len() + slot]`.
    pub cells: Vec<GridCell>,
}

impl WeekGrid {
    /// Builds the grid for the week containing `anchor`.
    pub fn build(schedule: &ServiceSchedule, anchor: NaiveDate, slots: &[Slot]) -> Self {
        let days = week_window(anchor);
        let mut cells = Vec::with_capacity(days.len() * slots.len());
        for date in days {
            for &slot in slots {
                cells.push(GridCell {
                    date,
                    slot,
                    vehicle_ids: schedule
                        .vehicles_in(date, slot)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                });
            }
        }
        Self {
            days,
            slots: slots.to_vec(),
            cells,
        }
    }

    /// The cell for `(date, slot)`, if shown in this grid.
    pub fn cell(&self, date: NaiveDate, slot: Slot) -> Option<&GridCell> {
        let day = self.days.iter().position(|d| *d == date)?;
        let col = self.slots.iter().position(|s| *s == slot)?;
        self.cells.get(day * self.slots.len() + col)
    }

    /// Total vehicle placements shown (a continuous job counts once per day).
    pub fn placements(&self) -> usize {
        self.cells.iter().map(|c| c.vehicle_ids.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Shift, SlotFamily};
    use crate::scheduler::ScheduleOptions;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_window_midweek() {
        // 2024-06-13 is a Thursday.
        let week = week_window(date(2024, 6, 13));
        assert_eq!(week[0], date(2024, 6, 10));
        assert_eq!(week[0].weekday(), Weekday::Mon);
        assert_eq!(week[6], date(2024, 6, 16));
        assert_eq!(week[6].weekday(), Weekday::Sun);
    }

    #[test]
    fn test_week_window_on_monday_and_sunday() {
        assert_eq!(week_start(date(2024, 6, 10)), date(2024, 6, 10));
        assert_eq!(week_start(date(2024, 6, 16)), date(2024, 6, 10));
    }

    #[test]
    fn test_week_window_crosses_year() {
        // 2025-01-01 is a Wednesday.
        let week = week_window(date(2025, 1, 1));
        assert_eq!(week[0], date(2024, 12, 30));
        assert_eq!(week[6], date(2025, 1, 5));
    }

    #[test]
    fn test_shift_week() {
        assert_eq!(shift_week(date(2024, 6, 13), 1), date(2024, 6, 20));
        assert_eq!(shift_week(date(2024, 6, 13), -2), date(2024, 5, 30));
    }

    #[test]
    fn test_week_helpers_saturate_at_range_ends() {
        let window = week_window(NaiveDate::MAX);
        assert_eq!(window[0], week_start(NaiveDate::MAX));
        assert!(window.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(window[6], NaiveDate::MAX);

        assert_eq!(week_start(NaiveDate::MIN), NaiveDate::MIN);
        let window = week_window(NaiveDate::MIN);
        assert_eq!(window[0], NaiveDate::MIN);
        assert!(window.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(shift_week(date(2024, 6, 13), 20_000_000), NaiveDate::MAX);
        assert_eq!(shift_week(date(2024, 6, 13), -20_000_000), NaiveDate::MIN);
        assert_eq!(shift_week(date(2024, 6, 13), i64::MAX), NaiveDate::MAX);
        assert_eq!(shift_week(date(2024, 6, 13), i64::MIN), NaiveDate::MIN);

        let slots = SlotFamily::Shift.slots();
        let grid = WeekGrid::build(&ServiceSchedule::new(), NaiveDate::MAX, &slots);
        assert_eq!(grid.cells.len(), 14);
    }

    #[test]
    fn test_grid_places_vehicles() {
        let slots = SlotFamily::Shift.slots();
        let morning: Slot = Shift::Morning.into();
        let afternoon: Slot = Shift::Afternoon.into();
        let once = ScheduleOptions::default();
        let continuous = ScheduleOptions::continuous();
        let schedule = ServiceSchedule::new()
            .schedule("1", date(2024, 6, 11), morning, once)
            .schedule("2", date(2024, 6, 14), afternoon, continuous);

        let grid = WeekGrid::build(&schedule, date(2024, 6, 12), &slots);
        assert_eq!(grid.cells.len(), 14);

        let tue_morning = grid.cell(date(2024, 6, 11), morning).unwrap();
        assert_eq!(tue_morning.vehicle_ids, vec!["1".to_string()]);

        // Continuous from Friday: Fri, Sat, Sun.
        assert_eq!(grid.placements(), 4);

        let next = WeekGrid::build(&schedule, shift_week(date(2024, 6, 12), 10), &slots);
        assert_eq!(next.placements(), 7);
    }

    #[test]
    fn test_grid_cell_outside_week() {
        let slots = SlotFamily::Shift.slots();
        let grid = WeekGrid::build(&ServiceSchedule::new(), date(2024, 6, 12), &slots);
        assert!(grid.cell(date(2024, 7, 1), slots[0]).is_none());
    }
}
