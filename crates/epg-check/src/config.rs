//! Validator configuration.
//!
//! Loaded from TOML; every field has a default so an empty file is valid:
//!
//! ```toml
//! [validator]
//! far_future_horizon_days = 365
//! ```

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Errors from loading or checking a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpgConfig {
    #[serde(default)]
    pub validator: ValidatorConfig,
}

impl EpgConfig {
    /// Parses and checks a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EpgConfig = toml::from_str(raw)?;
        config.validator.check()?;
        Ok(config)
    }
}

/// Thresholds used by the schedule validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Programs starting more than this many days after the validation
    /// instant are reported as far in the future.
    #[serde(default = "d_far_future_horizon_days")]
    pub far_future_horizon_days: i64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            far_future_horizon_days: d_far_future_horizon_days(),
        }
    }
}

fn d_far_future_horizon_days() -> i64 {
    365
}

impl ValidatorConfig {
    /// Rejects settings the validator cannot use.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.far_future_horizon_days < 0 {
            return Err(ConfigError::Invalid {
                field: "validator.far_future_horizon_days",
                reason: format!("must be >= 0, got {}", self.far_future_horizon_days),
            });
        }
        Ok(())
    }

    /// The far-future horizon as a time span, capped at chrono's maximum.
    pub fn horizon(&self) -> TimeDelta {
        TimeDelta::try_days(self.far_future_horizon_days).unwrap_or(TimeDelta::MAX)
    }
}
