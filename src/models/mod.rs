//! Maintenance domain models.
//!
//! Provides the plain data types the engine reads and produces. All types
//! derive `Serialize`/`Deserialize` so the external data-access layer can
//! map stored rows onto them directly.
//!
//! # Domain Mappings
//!
//! | Type | Fleet application |
//! |------|-------------------|
//! | `ComponentCheckpoint` | Last oil change / tire rotation / inspection |
//! | `UsageSnapshot` | Current odometer and engine hours |
//! | `UrgencyTier` | Status badge on listings |
//! | `ScheduledAssignment` | Workshop calendar booking |
//! | `Slot` | Shift or two-hour band in the workshop calendar |

mod assignment;
mod checkpoint;
mod slot;
mod tier;
mod usage;

pub use assignment::ScheduledAssignment;
pub use checkpoint::{
    components, ComponentCheckpoint, CounterKind, ServicePoint, DEFAULT_CALENDAR_INTERVAL_DAYS,
    DEFAULT_DISTANCE_INTERVAL,
};
pub use slot::{Shift, Slot, SlotFamily, TimeBand};
pub use tier::UrgencyTier;
pub use usage::UsageSnapshot;
