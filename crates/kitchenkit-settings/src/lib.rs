//! KitchenKit Settings Crate
//!
//! Handles application configuration: layout and clearance rules, history
//! depth and display preferences, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, DisplaySettings, MeasurementSystem, APP_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
