//! Error handling for KitchenKit
//!
//! Provides error types for the domain layer:
//! - Rejection reasons for edits that leave a project unchanged
//! - Rule set validation errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::data::UnitCategory;

/// Why an edit was not applied.
///
/// Layout operations never fail; they return the project unchanged. These
/// reasons let callers find out what prevented the edit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Module id not present in the project's library
    #[error("Module not found in library: {module_id}")]
    UnknownModule {
        /// The requested module id.
        module_id: String,
    },

    /// Unit id not present in the project
    #[error("Unit not found: {unit_id}")]
    UnknownUnit {
        /// The requested unit id.
        unit_id: String,
    },

    /// Unit is locked against edits
    #[error("Unit {unit_id} is locked")]
    Locked {
        /// The locked unit.
        unit_id: String,
    },

    /// Accessory does not fit this cabinet category
    #[error("Accessory {accessory} is not compatible with {category} units")]
    IncompatibleCategory {
        /// Accessory name.
        accessory: String,
        /// Category of the target unit.
        category: UnitCategory,
    },

    /// Unit is narrower than the accessory requires
    #[error("Accessory {accessory} needs at least {min_width}cm, unit is {width}cm")]
    TooNarrow {
        /// Accessory name.
        accessory: String,
        /// Minimum width required.
        min_width: f64,
        /// Actual unit width.
        width: f64,
    },
}

/// Main error type for KitchenKit core
#[derive(Error, Debug)]
pub enum Error {
    /// A rule set holds an unusable value
    #[error("Invalid rule {field}: {reason}")]
    InvalidRule {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// An edit was rejected
    #[error(transparent)]
    Rejected(#[from] RejectionReason),
}

impl Error {
    pub(crate) fn invalid_rule(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidRule {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for KitchenKit core operations
pub type Result<T> = std::result::Result<T, Error>;
