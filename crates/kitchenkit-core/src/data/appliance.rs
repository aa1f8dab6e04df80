//! Appliances and fixed service points.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::layout::Vec3;

/// Appliance kind.
///
/// Covers the generic planner kinds and the realistic subtypes used by
/// the preset library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApplianceKind {
    #[serde(rename = "sink")]
    Sink,
    #[serde(rename = "faucet")]
    Faucet,
    #[serde(rename = "cooktop")]
    Cooktop,
    #[serde(rename = "oven")]
    Oven,
    #[serde(rename = "microwave")]
    Microwave,
    #[serde(rename = "hood")]
    Hood,
    #[serde(rename = "fridge")]
    Fridge,
    #[serde(rename = "dishwasher")]
    Dishwasher,
    #[serde(rename = "refrigerator")]
    Refrigerator,
    #[serde(rename = "range-4")]
    Range4,
    #[serde(rename = "range-5")]
    Range5,
    #[serde(rename = "built-in-oven")]
    BuiltInOven,
    #[serde(rename = "washing-machine")]
    WashingMachine,
    #[serde(rename = "sink-single")]
    SinkSingle,
    #[serde(rename = "sink-double")]
    SinkDouble,
    #[serde(rename = "range-hood-wall")]
    RangeHoodWall,
    #[serde(rename = "range-hood-integrated")]
    RangeHoodIntegrated,
}

/// Work-triangle zone served by an appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkZone {
    /// Food storage
    Cold,
    /// Washing
    Wet,
    /// Cooking
    Hot,
}

impl ApplianceKind {
    pub fn work_zone(self) -> Option<WorkZone> {
        match self {
            Self::Fridge | Self::Refrigerator => Some(WorkZone::Cold),
            Self::Sink | Self::SinkSingle | Self::SinkDouble => Some(WorkZone::Wet),
            Self::Cooktop | Self::Range4 | Self::Range5 => Some(WorkZone::Hot),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sink => "sink",
            Self::Faucet => "faucet",
            Self::Cooktop => "cooktop",
            Self::Oven => "oven",
            Self::Microwave => "microwave",
            Self::Hood => "hood",
            Self::Fridge => "fridge",
            Self::Dishwasher => "dishwasher",
            Self::Refrigerator => "refrigerator",
            Self::Range4 => "range-4",
            Self::Range5 => "range-5",
            Self::BuiltInOven => "built-in-oven",
            Self::WashingMachine => "washing-machine",
            Self::SinkSingle => "sink-single",
            Self::SinkDouble => "sink-double",
            Self::RangeHoodWall => "range-hood-wall",
            Self::RangeHoodIntegrated => "range-hood-integrated",
        }
    }
}

impl fmt::Display for ApplianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ApplianceKind,
    pub width: f64,
    #[serde(default)]
    pub requires_ventilation_gap: f64,
    #[serde(default)]
    pub required_clearance: f64,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    /// Scene rotation in radians
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Appliance {
    /// Minimal appliance with no 3D placement.
    pub fn new(id: impl Into<String>, kind: ApplianceKind, width: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            width,
            requires_ventilation_gap: 0.0,
            required_clearance: 0.0,
            model: String::new(),
            position: None,
            rotation: 0.0,
            height: None,
            depth: None,
            color: None,
        }
    }

    pub fn work_zone(&self) -> Option<WorkZone> {
        self.kind.work_zone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceKind {
    #[serde(alias = "water-in")]
    WaterIn,
    #[serde(alias = "water-out")]
    WaterOut,
    Gas,
    Electric,
    #[serde(alias = "hood-vent")]
    HoodVent,
}

/// A fixed utility connection on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePoint {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    pub x: f64,
    pub y: f64,
}
