//! Startup configuration for parcelsort.
//!
//! Thresholds are read once when the process starts, from an optional TOML
//! file plus `PARCELSORT__*` environment overrides. Keys that are not set
//! fall back to the compiled-in [`Thresholds::DEFAULT`].

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::sorting::{Classifier, Thresholds};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PARCELSORT";

/// Errors that can occur when loading sorting configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configuration file was not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] ConfigError),

    /// The configuration text is not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The configuration file path is invalid.
    #[error("invalid configuration path: {0}")]
    InvalidPath(String),

    /// A threshold is zero, negative, or not finite.
    #[error("invalid threshold '{name}': must be a finite number greater than zero, got {value}")]
    InvalidThreshold {
        /// Threshold name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SortingConfig {
    /// Dispatch thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl SortingConfig {
    /// Load sorting configuration from a file path.
    ///
    /// Environment variables override file values using the format
    /// `PARCELSORT__<SECTION>__<KEY>` (e.g., `PARCELSORT__THRESHOLDS__MASS=25`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file does not exist
    /// - The configuration file cannot be parsed
    /// - The path is invalid
    /// - Any threshold is not a finite number greater than zero
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use parcelsort::settings::SortingConfig;
    ///
    /// let config = SortingConfig::load("config/parcelsort.toml")?;
    /// # Ok::<(), parcelsort::settings::SettingsError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();

        let path_str = path
            .to_str()
            .ok_or_else(|| SettingsError::InvalidPath(format!("{:?}", path)))?;

        if !path.exists() {
            return Err(SettingsError::FileNotFound(path_str.to_string()));
        }

        tracing::debug!(path = path_str, "loading sorting configuration");

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .add_source(env_source())
            .build()?;

        let sorting_config: SortingConfig = config.try_deserialize()?;
        sorting_config.validate()
    }

    /// Build configuration from compiled-in defaults plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or yields an invalid
    /// threshold.
    pub fn from_env() -> Result<Self, SettingsError> {
        tracing::debug!("loading sorting configuration from environment");

        let config = Config::builder().add_source(env_source()).build()?;

        let sorting_config: SortingConfig = config.try_deserialize()?;
        sorting_config.validate()
    }

    /// Parse configuration from TOML text. Environment overrides are not applied.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let sorting_config: SortingConfig = toml::from_str(text)?;
        sorting_config.validate()
    }

    /// Check that every threshold is finite and strictly positive.
    pub fn validate(self) -> Result<Self, SettingsError> {
        for (name, value) in self.thresholds.named() {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidThreshold { name, value });
            }
        }
        Ok(self)
    }

    /// Build a classifier from these settings.
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.thresholds)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
