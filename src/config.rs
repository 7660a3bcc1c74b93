//! Configuration management for the `geosearch` library
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::GeoSearchError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoSearchConfig {
    /// Geocoding provider configuration
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    /// Default search settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Geocoding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// API key, not required by the default Open-Meteo endpoint
    pub api_key: Option<String>,
    /// Base URL of the geocoding API
    #[serde(default = "default_geocoder_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_geocoder_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_geocoder_max_retries")]
    pub max_retries: u32,
}

/// Default search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Search radius in kilometers
    #[serde(default = "default_search_radius")]
    pub search_radius_km: f64,
    /// Maximum number of locations to report
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_geocoder_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_geocoder_timeout() -> u32 {
    10
}

fn default_geocoder_max_retries() -> u32 {
    3
}

fn default_search_radius() -> f64 {
    10.0
}

fn default_max_results() -> u32 {
    25
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_geocoder_base_url(),
            timeout_seconds: default_geocoder_timeout(),
            max_retries: default_geocoder_max_retries(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            search_radius_km: default_search_radius(),
            max_results: default_max_results(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl GeoSearchConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with GEOSEARCH_ prefix, e.g.
        // GEOSEARCH_GEOCODER__BASE_URL
        builder = builder.add_source(
            Environment::with_prefix("GEOSEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: GeoSearchConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("geosearch").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(api_key) = &self.geocoder.api_key {
            if api_key.is_empty() {
                return Err(GeoSearchError::config(
                    "Geocoder API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }

        if !self.geocoder.base_url.starts_with("http://")
            && !self.geocoder.base_url.starts_with("https://")
        {
            return Err(
                GeoSearchError::config("Geocoder base URL must be a valid HTTP or HTTPS URL")
                    .into(),
            );
        }

        if self.geocoder.timeout_seconds == 0 || self.geocoder.timeout_seconds > 300 {
            return Err(GeoSearchError::config(
                "Geocoder timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.geocoder.max_retries > 10 {
            return Err(GeoSearchError::config("Geocoder max retries cannot exceed 10").into());
        }

        if self.defaults.search_radius_km <= 0.0 || self.defaults.search_radius_km > 500.0 {
            return Err(GeoSearchError::config(
                "Search radius must be between 0 and 500 km",
            )
            .into());
        }

        if self.defaults.max_results == 0 || self.defaults.max_results > 1000 {
            return Err(GeoSearchError::config(
                "Maximum results must be between 1 and 1000",
            )
            .into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GeoSearchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
