//! Configuration and settings management for KitchenKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Layout rules (placement, snapping and duplicate spacing)
//! - Clearance rules (aisle, island and drawer thresholds)
//! - History depth
//! - Display preferences (measurement system, default layout)

use std::path::{Path, PathBuf};

pub use kitchenkit_core::units::MeasurementSystem;
use kitchenkit_core::{ClearanceRules, HistorySettings, LayoutMode, LayoutRules};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SettingsResult};

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "kitchenkit";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Units lengths are shown and entered in
    pub measurement_system: MeasurementSystem,
    /// Decimal places shown for lengths
    pub precision: u32,
    /// Layout used for new projects
    pub default_layout: LayoutMode,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Metric,
            precision: 1,
            default_layout: LayoutMode::L,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recently opened project files
    pub recent_files: Vec<PathBuf>,
    /// How many recent files to keep
    pub recent_files_count: usize,
    /// Layout engine spacing
    pub layout: LayoutRules,
    /// Clearance thresholds
    pub clearance: ClearanceRules,
    /// Undo history
    pub history: HistorySettings,
    /// Display preferences
    pub display: DisplaySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            recent_files_count: 10,
            layout: LayoutRules::default(),
            clearance: ClearanceRules::default(),
            history: HistorySettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config directory for KitchenKit, falling back to the home
    /// directory.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                ConfigError::ConfigDirectory("no config or home directory".to_string())
            })
    }

    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load the config at `path`, or defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.clearance.validate()?;
        self.history.validate()?;

        if self.display.precision > 4 {
            return Err(ConfigError::InvalidValue {
                key: "precision".to_string(),
                reason: format!("{} is more than 4 decimal places", self.display.precision),
            });
        }
        if self.recent_files_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "recent_files_count".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.recent_files_count);
    }
}
