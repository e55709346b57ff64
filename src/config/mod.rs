//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HOSTING_RANKER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use hosting_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Log filter: {}", config.logging.level);
//! ```

mod dataset;
mod error;
mod logging;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::analysis::WeightMapping;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Dataset configuration (source file)
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Weight overrides keyed by criterion id
    ///
    /// Environment keys arrive lower-cased, so ids are matched
    /// case-insensitively when the overrides are applied.
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HOSTING_RANKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HOSTING_RANKER__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `HOSTING_RANKER__DATASET__PATH=data/hosting.yaml` -> `dataset.path = ...`
    /// - `HOSTING_RANKER__WEIGHTS__C1=0.4` -> `weights.c1 = 0.4`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HOSTING_RANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.dataset.validate()?;
        for (criterion, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ValidationError::InvalidWeightOverride(criterion.clone()));
            }
        }
        Ok(())
    }

    /// Weight overrides as a mapping
    pub fn weight_overrides(&self) -> WeightMapping {
        self.weights
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect()
    }
}
