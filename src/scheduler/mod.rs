//! Workshop scheduling.
//!
//! Books vehicles into calendar slots with one active booking per vehicle.
//! Slots have no capacity limit; continuous jobs stay active on every day
//! from their start date until they are explicitly unscheduled.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use fleet_maintenance::models::Shift;
//! use fleet_maintenance::scheduler::{ScheduleOptions, ServiceSchedule};
//!
//! let d1 = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let d2 = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
//!
//! let schedule = ServiceSchedule::new()
//!     .schedule("7", d1, Shift::Morning.into(), ScheduleOptions::default())
//!     .schedule("7", d2, Shift::Afternoon.into(), ScheduleOptions::default());
//!
//! assert_eq!(schedule.len(), 1);
//! assert_eq!(schedule.assignment_for("7").unwrap().date, d2);
//! ```

mod book;
mod week;

pub use book::{schedule, unschedule, ScheduleOptions, ServiceSchedule};
pub use week::{shift_week, week_start, week_window, GridCell, WeekGrid};
