//! Engine configuration.
//!
//! Describes which components are tracked, their default intervals, and
//! which policy presets the listings use. [`EngineConfig::default`]
//! reproduces the built-in constants; a JSON document can override any
//! part of it.
//!
//! ```json
//! {
//!   "components": [
//!     { "id": "aceite_motor", "counter_kind": "distance", "default_interval": 15000 }
//!   ],
//!   "due_policy": { "preset": "due_cutoff", "cutoff_percent": 5.0 },
//!   "slot_family": "time_band"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::aggregation::{aggregate, VehicleStatus};
use crate::evaluation::{EvaluationRules, PolicyPreset, TierPolicy};
use crate::models::{
    components, ComponentCheckpoint, CounterKind, ServicePoint, SlotFamily, UsageSnapshot,
    DEFAULT_CALENDAR_INTERVAL_DAYS, DEFAULT_DISTANCE_INTERVAL,
};
use crate::{Error, Result};

/// A tracked maintenance component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component key.
    pub id: String,
    /// Counter the interval is measured in.
    pub counter_kind: CounterKind,
    /// Interval applied when a checkpoint has none.
    #[serde(default)]
    pub default_interval: Option<f64>,
}

impl ComponentSpec {
    /// Creates a component spec.
    pub fn new(
        id: impl Into<String>,
        counter_kind: CounterKind,
        default_interval: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            counter_kind,
            default_interval,
        }
    }

    /// Builds a checkpoint for this component with the configured default interval.
    pub fn checkpoint(&self, last_service: Option<ServicePoint>) -> ComponentCheckpoint {
        ComponentCheckpoint {
            component_id: self.id.clone(),
            counter_kind: self.counter_kind,
            last_service,
            interval: self.default_interval,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tracked components, in display priority order.
    pub components: Vec<ComponentSpec>,
    /// Input interpretation rules.
    pub rules: EvaluationRules,
    /// Policy of the maintenance-due listing.
    pub due_policy: PolicyPreset,
    /// Policy of the tire and inspection listings.
    pub tier_policy: PolicyPreset,
    /// Slot enumeration of the workshop calendar.
    pub slot_family: SlotFamily,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            components: vec![
                ComponentSpec::new(
                    components::OIL_BY_DISTANCE,
                    CounterKind::Distance,
                    Some(DEFAULT_DISTANCE_INTERVAL),
                ),
                ComponentSpec::new(components::OIL_BY_HOURS, CounterKind::Hours, None),
                ComponentSpec::new(
                    components::TIRE_ROTATION,
                    CounterKind::Distance,
                    Some(DEFAULT_DISTANCE_INTERVAL),
                ),
                ComponentSpec::new(
                    components::MONTHLY_INSPECTION,
                    CounterKind::CalendarDays,
                    Some(DEFAULT_CALENDAR_INTERVAL_DAYS),
                ),
            ],
            rules: EvaluationRules::default(),
            due_policy: PolicyPreset::maintenance_due(),
            tier_policy: PolicyPreset::traffic_light(),
            slot_family: SlotFamily::default(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            components = config.components.len(),
            due_policy = config.due_policy.name(),
            tier_policy = config.tier_policy.name(),
            "loaded maintenance configuration"
        );
        Ok(config)
    }

    /// Checks component ids, intervals, and policy thresholds.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for spec in &self.components {
            if spec.id.trim().is_empty() {
                let message = "component id must not be empty".to_string();
                return Err(Error::InvalidConfig(message));
            }
            if !ids.insert(spec.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate component id '{}'",
                    spec.id
                )));
            }
            if let Some(interval) = spec.default_interval {
                if !interval.is_finite() || interval <= 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "component '{}' default_interval must be > 0 (got {interval})",
                        spec.id
                    )));
                }
            }
        }
        self.due_policy
            .validate()
            .map_err(|e| Error::InvalidConfig(format!("due_policy: {e}")))?;
        self.tier_policy
            .validate()
            .map_err(|e| Error::InvalidConfig(format!("tier_policy: {e}")))?;
        Ok(())
    }

    /// The spec of a configured component.
    pub fn component(&self, id: &str) -> Option<&ComponentSpec> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Builds a checkpoint for a configured component.
    ///
    /// Unknown ids get a distance checkpoint with the built-in default.
    pub fn checkpoint_for(
        &self,
        id: &str,
        last_service: Option<ServicePoint>,
    ) -> ComponentCheckpoint {
        match self.component(id) {
            Some(spec) => spec.checkpoint(last_service),
            None => ComponentCheckpoint {
                component_id: id.to_string(),
                counter_kind: CounterKind::Distance,
                last_service,
                interval: None,
            },
        }
    }

    /// Status of a vehicle under the maintenance-due policy.
    pub fn due_status(
        &self,
        usage: &UsageSnapshot,
        checkpoints: &[ComponentCheckpoint],
    ) -> VehicleStatus {
        aggregate(usage, checkpoints, &self.due_policy, &self.rules)
    }

    /// Status of a vehicle under the listing tier policy.
    pub fn tier_status(
        &self,
        usage: &UsageSnapshot,
        checkpoints: &[ComponentCheckpoint],
    ) -> VehicleStatus {
        aggregate(usage, checkpoints, &self.tier_policy, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::policies::DueCutoff;
    use crate::models::UrgencyTier;
    use chrono::NaiveDate;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.components.len(), 4);
        assert_eq!(config.due_policy, PolicyPreset::maintenance_due());
        assert_eq!(config.tier_policy, PolicyPreset::traffic_light());
        assert!(config.rules.zero_is_unset);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{
            "due_policy": { "preset": "due_cutoff", "cutoff_percent": 8.0 },
            "slot_family": "time_band"
        }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        let expected = PolicyPreset::DueCutoff(DueCutoff::with_cutoff(8.0));
        assert_eq!(config.due_policy, expected);
        assert_eq!(config.slot_family, SlotFamily::TimeBand);
        assert_eq!(config.components.len(), 4);
    }

    #[test]
    fn test_rules_from_json() {
        let json = r#"{ "rules": { "zero_is_unset": false } }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert!(!config.rules.zero_is_unset);
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let json = r#"{
            "components": [
                { "id": "aceite_motor", "counter_kind": "distance", "default_interval": 0 }
            ]
        }"#;
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let json = r#"{
            "components": [
                { "id": "a", "counter_kind": "distance" },
                { "id": "a", "counter_kind": "hours" }
            ]
        }"#;
        assert!(matches!(
            EngineConfig::from_json_str(json),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let json = r#"{
            "tier_policy": {
                "preset": "three_tier",
                "attention_below": 5.0,
                "critical_below": 50.0
            }
        }"#;
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("tier_policy"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json_str("{ not json"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let missing = "/definitely/not/here.json";
        let err = EngineConfig::from_path(missing).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_checkpoint_for_uses_configured_interval() {
        let json = r#"{
            "components": [
                { "id": "aceite_motor", "counter_kind": "distance", "default_interval": 15000 }
            ]
        }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        let cp = config.checkpoint_for("aceite_motor", Some(ServicePoint::Counter(90_000.0)));
        assert_eq!(cp.effective_interval(), Some(15_000.0));

        let unknown = config.checkpoint_for("frenos", None);
        assert_eq!(unknown.counter_kind, CounterKind::Distance);
        assert_eq!(unknown.effective_interval(), Some(10_000.0));
    }

    #[test]
    fn test_due_and_tier_status() {
        let config = EngineConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        // 20% remaining
        let usage = UsageSnapshot::new("V7", today).with_distance(98_000.0);
        let cps = vec![config.checkpoint_for(
            components::OIL_BY_DISTANCE,
            Some(ServicePoint::Counter(90_000.0)),
        )];

        assert_eq!(config.due_status(&usage, &cps).worst_tier, UrgencyTier::Ok);
        assert_eq!(
            config.tier_status(&usage, &cps).worst_tier,
            UrgencyTier::Attention
        );
    }
}
