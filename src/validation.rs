//! Caller-level input validation.
//!
//! The engine itself is permissive: bad checkpoints degrade to `NoData`
//! and any `(date, slot)` can be booked. Callers that want stricter
//! behavior run these checks first. Detects:
//! - Duplicate component IDs on one vehicle
//! - Non-positive or missing intervals
//! - Service points that don't match the counter kind
//! - Bookings in the past or for unknown vehicles
//!
//! All checks collect every problem found rather than stopping at the first.

use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{ComponentCheckpoint, CounterKind, ServicePoint, Slot};
use crate::scheduler::{ScheduleOptions, ServiceSchedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two components share the same ID.
    DuplicateId,
    /// Interval is zero, negative, or not a number.
    NonPositiveInterval,
    /// Hours-based component without an interval.
    MissingInterval,
    /// Service point type doesn't match the counter kind.
    KindMismatch,
    /// Booking date before today.
    PastDate,
    /// Booking for a vehicle the caller doesn't know.
    UnknownVehicle,
}

impl ValidationError {
    /// Creates an error of `kind`.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the checkpoints configured for one vehicle.
///
/// Checks:
/// 1. No duplicate component IDs
/// 2. Explicit intervals are positive
/// 3. Hours-based components carry an interval
/// 4. Service points match the counter kind
pub fn validate_checkpoints(checkpoints: &[ComponentCheckpoint]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for cp in checkpoints {
        if !ids.insert(cp.component_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate component ID: {}", cp.component_id),
            ));
        }

        match cp.interval {
            Some(interval) if !interval.is_finite() || interval <= 0.0 => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveInterval,
                    format!(
                        "Component '{}' has non-positive interval {interval}",
                        cp.component_id
                    ),
                ));
            }
            None if cp.effective_interval().is_none() => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingInterval,
                    format!(
                        "Component '{}' requires an explicit interval",
                        cp.component_id
                    ),
                ));
            }
            _ => {}
        }

        let mismatch = matches!(
            (cp.counter_kind, cp.last_service),
            (CounterKind::Distance | CounterKind::Hours, Some(ServicePoint::Date(_)))
                | (CounterKind::CalendarDays, Some(ServicePoint::Counter(_)))
        );
        if mismatch {
            errors.push(ValidationError::new(
                ValidationErrorKind::KindMismatch,
                format!(
                    "Component '{}' service point doesn't match counter kind {:?}",
                    cp.component_id, cp.counter_kind
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a booking request.
///
/// Checks:
/// 1. `date` is not before `today`
/// 2. `vehicle_id` is among `known_vehicles`
pub fn validate_assignment(
    vehicle_id: &str,
    date: NaiveDate,
    today: NaiveDate,
    known_vehicles: &[&str],
) -> ValidationResult {
    let mut errors = Vec::new();

    if date < today {
        errors.push(ValidationError::new(
            ValidationErrorKind::PastDate,
            format!("Booking date {date} is before {today}"),
        ));
    }

    if !known_vehicles.contains(&vehicle_id) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownVehicle,
            format!("Unknown vehicle '{vehicle_id}'"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Books a vehicle only if [`validate_assignment`] passes.
pub fn schedule_checked(
    schedule: &ServiceSchedule,
    vehicle_id: &str,
    date: NaiveDate,
    slot: Slot,
    opts: ScheduleOptions,
    today: NaiveDate,
    known_vehicles: &[&str],
) -> crate::Result<ServiceSchedule> {
    validate_assignment(vehicle_id, date, today, known_vehicles)?;
    Ok(schedule.schedule(vehicle_id, date, slot, opts))
}
