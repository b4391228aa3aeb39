//! Configuration system for RosterForge.
//!
//! Cost weights and evaluation settings load from TOML or YAML so they can
//! be tuned without recompiling. Any field left out keeps its default.
//!
//! # Examples
//!
//! ```
//! use rosterforge_config::RosterConfig;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     [weights]
//!     preferences = 25
//!
//!     [evaluation]
//!     parallel = true
//! "#).unwrap();
//!
//! assert_eq!(config.weights.preferences, 25);
//! assert_eq!(config.weights.cons_shifts, 15);
//! assert!(config.evaluation.parallel);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rosterforge_config::RosterConfig;
//!
//! let config = RosterConfig::load("roster.toml").unwrap_or_default();
//! assert_eq!(config.weights.optimal_demand, 30);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterConfig {
    #[serde(default)]
    pub weights: Weights,

    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

impl RosterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format from its extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables the parallel per-nurse pass.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.evaluation.parallel = parallel;
        self
    }
}

/// Cost weight of each soft constraint.
///
/// Defaults are the values of the international nurse rostering competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Weights {
    /// Consecutive days worked, below minimum or above maximum.
    pub cons_days_work: i64,
    /// Consecutive days off, below minimum or above maximum.
    pub cons_days_off: i64,
    /// Consecutive days on the same shift type.
    pub cons_shifts: i64,
    pub preferences: i64,
    pub complete_weekend: i64,
    /// Total days worked outside the contract bounds, per day.
    pub total_shifts: i64,
    /// Weekends worked above the contract maximum, per weekend.
    pub total_weekends: i64,
    /// Missing nurse below the optimal staffing level, per nurse.
    pub optimal_demand: i64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cons_days_work: 30,
            cons_days_off: 30,
            cons_shifts: 15,
            preferences: 10,
            complete_weekend: 30,
            total_shifts: 20,
            total_weekends: 30,
            optimal_demand: 30,
        }
    }
}

impl Weights {
    /// Every weight set to `weight`.
    pub fn uniform(weight: i64) -> Self {
        Self {
            cons_days_work: weight,
            cons_days_off: weight,
            cons_shifts: weight,
            preferences: weight,
            complete_weekend: weight,
            total_shifts: weight,
            total_weekends: weight,
            optimal_demand: weight,
        }
    }

    /// Weights paired with their field names.
    pub fn entries(&self) -> [(&'static str, i64); 8] {
        [
            ("cons_days_work", self.cons_days_work),
            ("cons_days_off", self.cons_days_off),
            ("cons_shifts", self.cons_shifts),
            ("preferences", self.preferences),
            ("complete_weekend", self.complete_weekend),
            ("total_shifts", self.total_shifts),
            ("total_weekends", self.total_weekends),
            ("optimal_demand", self.optimal_demand),
        ]
    }

    /// Rejects negative weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.entries().iter().find(|(_, w)| *w < 0) {
            Some((name, w)) => Err(ConfigError::Invalid(format!(
                "weight {} must not be negative, got {}",
                name, w
            ))),
            None => Ok(()),
        }
    }
}

/// Evaluation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct EvaluationConfig {
    /// Check nurses on the rayon pool. Results are identical either way.
    pub parallel: bool,
}
