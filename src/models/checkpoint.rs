//! Component checkpoint model.
//!
//! A checkpoint records the last known service point of one maintenance
//! component (engine oil, tire rotation, monthly inspection...) together
//! with its service interval.
//!
//! # Interval Defaults
//! Defaults differ per counter kind and are intentionally not unified:
//!
//! | Kind | Default interval |
//! |------|------------------|
//! | Distance | 10 000 |
//! | Hours | none (no data without an explicit interval) |
//! | CalendarDays | 30 |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default service interval for distance-based components.
pub const DEFAULT_DISTANCE_INTERVAL: f64 = 10_000.0;

/// Default service interval for calendar-based components (days).
pub const DEFAULT_CALENDAR_INTERVAL_DAYS: f64 = 30.0;

/// Well-known component identifiers and their display priority.
pub mod components {
    /// Engine oil, tracked by odometer.
    pub const OIL_BY_DISTANCE: &str = "aceite_motor";
    /// Engine oil, tracked by engine hours.
    pub const OIL_BY_HOURS: &str = "aceite_motor_horas";
    /// Tire rotation, tracked by odometer.
    pub const TIRE_ROTATION: &str = "rotacion_neumaticos";
    /// Monthly inspection, tracked by calendar days.
    pub const MONTHLY_INSPECTION: &str = "revision_mensual";

    /// Display priority order for tie-breaking between equally urgent components.
    pub const DISPLAY_PRIORITY: [&str; 4] = [
        OIL_BY_DISTANCE,
        OIL_BY_HOURS,
        TIRE_ROTATION,
        MONTHLY_INSPECTION,
    ];

    /// Position of a component in the display priority (unknown ids sort last).
    pub fn display_priority(component_id: &str) -> usize {
        DISPLAY_PRIORITY
            .iter()
            .position(|id| *id == component_id)
            .unwrap_or(DISPLAY_PRIORITY.len())
    }
}

/// Which counter a component is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    /// Odometer distance.
    Distance,
    /// Engine hours.
    Hours,
    /// Elapsed calendar days.
    CalendarDays,
}

impl CounterKind {
    /// Interval used when the checkpoint carries none.
    pub fn default_interval(self) -> Option<f64> {
        match self {
            CounterKind::Distance => Some(DEFAULT_DISTANCE_INTERVAL),
            CounterKind::Hours => None,
            CounterKind::CalendarDays => Some(DEFAULT_CALENDAR_INTERVAL_DAYS),
        }
    }

    /// Unit label for remaining-units display.
    pub fn unit(self) -> &'static str {
        match self {
            CounterKind::Distance => "km",
            CounterKind::Hours => "h",
            CounterKind::CalendarDays => "days",
        }
    }
}

/// The counter value or date at which the component was last serviced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServicePoint {
    /// Odometer or engine-hours reading.
    Counter(f64),
    /// Service date.
    Date(NaiveDate),
}

impl ServicePoint {
    /// The counter reading, if this is a counter point.
    pub fn as_counter(&self) -> Option<f64> {
        match self {
            ServicePoint::Counter(v) => Some(*v),
            ServicePoint::Date(_) => None,
        }
    }

    /// The service date, if this is a date point.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ServicePoint::Date(d) => Some(*d),
            ServicePoint::Counter(_) => None,
        }
    }
}

/// Last-known service point of one maintenance component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCheckpoint {
    /// Component key (e.g. `"aceite_motor"`).
    pub component_id: String,
    /// Counter the interval is measured in.
    pub counter_kind: CounterKind,
    /// Last service point. `None` = never recorded.
    pub last_service: Option<ServicePoint>,
    /// Service interval. `None` = use the kind's default, if any.
    pub interval: Option<f64>,
}

impl ComponentCheckpoint {
    /// Creates a checkpoint with no recorded service and the default interval.
    pub fn new(component_id: impl Into<String>, counter_kind: CounterKind) -> Self {
        Self {
            component_id: component_id.into(),
            counter_kind,
            last_service: None,
            interval: None,
        }
    }

    /// Distance-based checkpoint last serviced at `km`.
    pub fn distance(component_id: impl Into<String>, km: f64) -> Self {
        Self::new(component_id, CounterKind::Distance)
            .with_last_service(ServicePoint::Counter(km))
    }

    /// Hours-based checkpoint last serviced at `hours`.
    pub fn hours(component_id: impl Into<String>, hours: f64) -> Self {
        Self::new(component_id, CounterKind::Hours)
            .with_last_service(ServicePoint::Counter(hours))
    }

    /// Calendar-based checkpoint last serviced on `date`.
    pub fn calendar(component_id: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(component_id, CounterKind::CalendarDays)
            .with_last_service(ServicePoint::Date(date))
    }

    /// Sets the last service point.
    pub fn with_last_service(mut self, point: ServicePoint) -> Self {
        self.last_service = Some(point);
        self
    }

    /// Sets an explicit interval.
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Interval after applying the kind default. `None` if neither is set.
    ///
    /// Non-positive intervals are returned as-is; the evaluator rejects them.
    pub fn effective_interval(&self) -> Option<f64> {
        self.interval.or_else(|| self.counter_kind.default_interval())
    }

    /// Display priority of this component.
    pub fn display_priority(&self) -> usize {
        components::display_priority(&self.component_id)
    }
}
