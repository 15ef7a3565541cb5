use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::types::Config;

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 5000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tally/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tally").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `view.tick_rate_ms` is within 10..=5000
    /// - `logging.level` is a valid level filter
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.view.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "view.tick_rate_ms must be between {} and {}, got {}",
                    MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, tick
                ),
            });
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown logging.level '{}'", self.logging.level),
            });
        }

        Ok(())
    }
}
