//! Message bar configuration, loaded from TOML.
//!
//! ```toml
//! buffer_size = 200
//! save_dir = "/home/me/.local/share/msgbar"
//! countdown_threshold_ms = 2000
//! countdown_color = "#800080"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::DEFAULT_BUFFER_SIZE;
use crate::message::Rgb;
use crate::wait::DEFAULT_GAUGE_THRESHOLD;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`BarConfig`].
    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The values parsed but are unusable.
    #[error("Config validation failed: {message}")]
    ValidationError {
        /// What was wrong.
        message: String,
    },
}

/// Settings for a [`crate::MessageBar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Messages retained before the oldest is evicted.
    pub buffer_size: usize,
    /// Directory for default-named saves. Saving to it is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_dir: Option<PathBuf>,
    /// Timeouts longer than this get a countdown gauge.
    pub countdown_threshold_ms: u64,
    /// Color hosts should draw the countdown gauge in.
    pub countdown_color: Rgb,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            save_dir: None,
            countdown_threshold_ms: u64::try_from(DEFAULT_GAUGE_THRESHOLD.as_millis())
                .unwrap_or(u64::MAX),
            countdown_color: Rgb::PURPLE,
        }
    }
}

impl BarConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/msgbar/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config directory is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("msgbar").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `BarConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The buffer holds at least one message
    /// - The save directory, if set, is not an existing regular file
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "buffer_size must be at least 1".to_string(),
            });
        }

        if let Some(dir) = &self.save_dir {
            if dir.is_file() {
                return Err(ConfigError::ValidationError {
                    message: format!("save_dir '{}' is a file, not a directory", dir.display()),
                });
            }
        }

        Ok(())
    }

    /// The countdown threshold as a [`Duration`].
    pub const fn countdown_threshold(&self) -> Duration {
        Duration::from_millis(self.countdown_threshold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BarConfig::default();
        assert_eq!(config.buffer_size, 100);
        assert_eq!(config.save_dir, None);
        assert_eq!(config.countdown_threshold(), Duration::from_secs(2));
        assert_eq!(config.countdown_color, Rgb::new(0x80, 0, 0x80));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BarConfig = toml::from_str("buffer_size = 5").unwrap();
        assert_eq!(config.buffer_size, 5);
        assert_eq!(config.countdown_threshold_ms, 2000);
    }

    #[test]
    fn test_color_parsed_from_hex_string() {
        let config: BarConfig = toml::from_str(r##"countdown_color = "#00ff00""##).unwrap();
        assert_eq!(config.countdown_color, Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let result: Result<BarConfig, _> = toml::from_str(r#"countdown_color = "green""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_buffer_size_fails_validation() {
        let config = BarConfig {
            buffer_size: 0,
            ..BarConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
