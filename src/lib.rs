//! Maintenance-due engine for vehicle fleets.
//!
//! Computes how much of each component's service interval remains,
//! classifies urgency, and books vehicles into workshop slots. Everything
//! here is a pure function over caller-supplied data: the data-access
//! layer loads usage snapshots and checkpoints, and persists the
//! bookings this crate returns.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ComponentCheckpoint`, `UsageSnapshot`,
//!   `UrgencyTier`, `Slot`, `ScheduledAssignment`
//! - **`evaluation`**: Remaining-life computation and tier policies
//!   (`DueCutoff`, `ThreeTier`, `Graded`)
//! - **`aggregation`**: Per-vehicle worst-case status, labor estimate,
//!   urgency ranking, fleet summary
//! - **`scheduler`**: Immutable booking collection, week window, week grid
//! - **`sorting`**: Stable listing sort with column toggle state
//! - **`validation`**: Optional caller-level checks (the core is permissive)
//! - **`config`**: JSON-loadable engine configuration
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fleet_maintenance::config::EngineConfig;
//! use fleet_maintenance::models::{components, ServicePoint, UrgencyTier, UsageSnapshot};
//!
//! let config = EngineConfig::default();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let usage = UsageSnapshot::new("V7", today).with_distance(99_500.0);
//! let checkpoints = vec![config.checkpoint_for(
//!     components::OIL_BY_DISTANCE,
//!     Some(ServicePoint::Counter(90_000.0)),
//! )];
//!
//! let status = config.due_status(&usage, &checkpoints);
//! assert_eq!(status.worst_tier, UrgencyTier::Critical);
//! assert_eq!(status.lowest_percent, Some(5.0));
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (`debug` when inputs degrade to no data or a
//! booking is replaced, `trace` per evaluated component). Install a
//! subscriber in the host application to see them.

pub mod aggregation;
pub mod config;
mod error;
pub mod evaluation;
pub mod models;
pub mod scheduler;
pub mod sorting;
pub mod validation;

pub use error::{Error, Result};
