//! Unit conversion utilities
//!
//! Plans are stored in centimetres. This module formats lengths for the
//! display system (metric centimetres or imperial inches) and provides the
//! rounding used by reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CM_PER_INCH: f64 = 2.54;
pub const CM2_PER_M2: f64 = 10_000.0;
pub const CM_PER_M: f64 = 100.0;

/// Measurement system used for display and input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Centimetres
    #[default]
    Metric,
    /// Inches
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "cm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Square centimetres to square metres, rounded to 2 decimal places.
pub fn cm2_to_m2(area_cm2: f64) -> f64 {
    round_to(area_cm2 / CM2_PER_M2, 2)
}

/// Centimetres to metres, rounded to 2 decimal places.
pub fn cm_to_m(length_cm: f64) -> f64 {
    round_to(length_cm / CM_PER_M, 2)
}

/// Format a length held in centimetres in `system`, with `precision`
/// decimal places and the unit label.
pub fn format_length(value_cm: f64, system: MeasurementSystem, precision: u32) -> String {
    let value = match system {
        MeasurementSystem::Metric => value_cm,
        MeasurementSystem::Imperial => value_cm / CM_PER_INCH,
    };
    format!("{:.*} {}", precision as usize, value, unit_label(system))
}

/// Unit label for the given system ("cm" or "in")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "cm",
        MeasurementSystem::Imperial => "in",
    }
}
