//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading,
//! saving and validation.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A rule value is out of its valid range.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    /// No configuration directory could be resolved for this platform.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),
}

impl From<kitchenkit_core::Error> for ConfigError {
    fn from(err: kitchenkit_core::Error) -> Self {
        match err {
            kitchenkit_core::Error::InvalidRule { field, reason } => Self::InvalidValue {
                key: field.to_string(),
                reason,
            },
            other => Self::InvalidValue {
                key: "config".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported config format: yaml");

        let err = ConfigError::InvalidValue {
            key: "snap_grid".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for 'snap_grid': must be positive");
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::ConfigDirectory("no home".to_string());
        let settings_err: SettingsError = config_err.into();
        assert!(matches!(settings_err, SettingsError::Config(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let settings_err: SettingsError = io_err.into();
        assert!(matches!(settings_err, SettingsError::IoError(_)));

        let rule_err = kitchenkit_core::HistorySettings { capacity: 0 }.validate().unwrap_err();
        let config_err: ConfigError = rule_err.into();
        assert!(matches!(config_err, ConfigError::InvalidValue { ref key, .. } if key == "capacity"));
    }
}
