//! Auto-enclosure policy configuration.

use serde::{Deserialize, Serialize};
use zoo_core::enums::{Climate, HabitatType};
use zoo_core::habitat::HabitatSet;
use zoo_engine::assign::{DEFAULT_MIN_SIZE, DEFAULT_NAME_PREFIX, DEFAULT_SIZE_MULTIPLIER};
use zoo_engine::AutoEnclosurePolicy;

use crate::ConfigError;

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

const fn default_min_size() -> f64 {
    DEFAULT_MIN_SIZE
}

const fn default_size_multiplier() -> f64 {
    DEFAULT_SIZE_MULTIPLIER
}

const fn default_climate() -> Climate {
    Climate::Temperate
}

fn default_habitat() -> HabitatSet {
    HabitatSet::single(HabitatType::Grassland)
}

/// How `zoo assign` shapes the enclosures it creates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssignConfig {
    /// Generated enclosures are named `"<prefix> <n>"`.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Smallest size of a generated enclosure, in m².
    #[serde(default = "default_min_size")]
    pub min_size: f64,

    /// Factor applied to the founding animal's space requirement.
    #[serde(default = "default_size_multiplier")]
    pub size_multiplier: f64,

    #[serde(default = "default_climate")]
    pub climate: Climate,

    #[serde(default = "default_habitat")]
    pub habitat: HabitatSet,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            name_prefix: default_name_prefix(),
            min_size: default_min_size(),
            size_multiplier: default_size_multiplier(),
            climate: default_climate(),
            habitat: default_habitat(),
        }
    }
}

impl AssignConfig {
    /// Reject values the assignment engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name_prefix.trim().is_empty() {
            return Err(ConfigError::invalid("assign.name_prefix", "must not be empty"));
        }
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(ConfigError::invalid(
                "assign.min_size",
                format!("must be a positive number, got {}", self.min_size),
            ));
        }
        if !self.size_multiplier.is_finite() || self.size_multiplier < 1.0 {
            return Err(ConfigError::invalid(
                "assign.size_multiplier",
                format!("must be at least 1, got {}", self.size_multiplier),
            ));
        }
        Ok(())
    }

    /// The engine policy these settings describe.
    #[must_use]
    pub fn policy(&self) -> AutoEnclosurePolicy {
        AutoEnclosurePolicy {
            name_prefix: self.name_prefix.trim().to_string(),
            min_size: self.min_size,
            size_multiplier: self.size_multiplier,
            climate: self.climate,
            habitat: self.habitat.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_engine_policy() {
        let config = AssignConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy(), AutoEnclosurePolicy::default());
    }

    #[test]
    fn rejects_empty_prefix() {
        let config = AssignConfig {
            name_prefix: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "assign.name_prefix"
        ));
    }

    #[test]
    fn rejects_non_positive_floor() {
        let config = AssignConfig {
            min_size: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_shrinking_multiplier() {
        let config = AssignConfig {
            size_multiplier: 0.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'assign.size_multiplier': must be at least 1, got 0.5"
        );
    }
}
