//! Appliance preset library
//!
//! Default dimensions and colours for the realistic appliance kinds,
//! used when an appliance is dropped into the scene.

use serde::{Deserialize, Serialize};

use super::appliance::{Appliance, ApplianceKind};
use super::layout::Vec3;

/// How an appliance is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppliancePlacement {
    Freestanding,
    BuiltIn,
    Countertop,
    WallMounted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliancePreset {
    pub kind: ApplianceKind,
    pub name: String,
    pub description: String,
    pub default_width: f64,
    pub default_height: f64,
    pub default_depth: f64,
    pub placement: AppliancePlacement,
    pub color: String,
}

impl AppliancePreset {
    fn new(
        kind: ApplianceKind,
        name: &str,
        description: &str,
        dims: (f64, f64, f64),
        placement: AppliancePlacement,
        color: &str,
    ) -> Self {
        Self {
            kind,
            name: name.to_string(),
            description: description.to_string(),
            default_width: dims.0,
            default_height: dims.1,
            default_depth: dims.2,
            placement,
            color: color.to_string(),
        }
    }
}

/// Registry of appliance presets.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceLibrary {
    presets: Vec<AppliancePreset>,
}

impl Default for ApplianceLibrary {
    fn default() -> Self {
        use AppliancePlacement::*;
        use ApplianceKind::*;

        Self {
            presets: vec![
                AppliancePreset::new(
                    Refrigerator,
                    "Refrigerator",
                    "Standard freestanding fridge",
                    (60.0, 180.0, 65.0),
                    Freestanding,
                    "#C0C0C0",
                ),
                AppliancePreset::new(
                    Range4,
                    "Range (4-Burner)",
                    "60cm 4-burner range/stove",
                    (60.0, 85.0, 60.0),
                    BuiltIn,
                    "#A0A0A0",
                ),
                AppliancePreset::new(
                    Range5,
                    "Range (5-Burner)",
                    "90cm 5-burner range/stove",
                    (90.0, 85.0, 60.0),
                    BuiltIn,
                    "#A0A0A0",
                ),
                AppliancePreset::new(
                    BuiltInOven,
                    "Built-in Oven",
                    "Wall-mounted built-in oven",
                    (60.0, 60.0, 55.0),
                    BuiltIn,
                    "#333333",
                ),
                AppliancePreset::new(
                    Microwave,
                    "Microwave",
                    "Countertop or built-in microwave",
                    (50.0, 30.0, 35.0),
                    Countertop,
                    "#444444",
                ),
                AppliancePreset::new(
                    Dishwasher,
                    "Dishwasher",
                    "Standard built-in dishwasher",
                    (60.0, 82.0, 58.0),
                    BuiltIn,
                    "#C0C0C0",
                ),
                AppliancePreset::new(
                    SinkSingle,
                    "Single Bowl Sink",
                    "Single bowl kitchen sink",
                    (50.0, 20.0, 40.0),
                    BuiltIn,
                    "#B8B8B8",
                ),
                AppliancePreset::new(
                    SinkDouble,
                    "Double Bowl Sink",
                    "Double bowl kitchen sink",
                    (80.0, 20.0, 45.0),
                    BuiltIn,
                    "#B8B8B8",
                ),
                AppliancePreset::new(
                    RangeHoodWall,
                    "Wall Range Hood",
                    "Wall-mounted range hood",
                    (60.0, 50.0, 45.0),
                    WallMounted,
                    "#A8A8A8",
                ),
                AppliancePreset::new(
                    WashingMachine,
                    "Washing Machine",
                    "Front-loading washing machine",
                    (60.0, 85.0, 60.0),
                    BuiltIn,
                    "#E0E0E0",
                ),
            ],
        }
    }
}

impl ApplianceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presets(&self) -> &[AppliancePreset] {
        &self.presets
    }

    pub fn get(&self, kind: ApplianceKind) -> Option<&AppliancePreset> {
        self.presets.iter().find(|p| p.kind == kind)
    }

    /// Stamp an appliance from the preset for `kind`, placed at the origin.
    ///
    /// Kinds without a preset get a 60cm wide appliance with no dimensions.
    pub fn instantiate(&self, kind: ApplianceKind, id: impl Into<String>) -> Appliance {
        let mut appliance = Appliance::new(id, kind, 60.0);
        if let Some(preset) = self.get(kind) {
            appliance.width = preset.default_width;
            appliance.height = Some(preset.default_height);
            appliance.depth = Some(preset.default_depth);
            appliance.color = Some(preset.color.clone());
            appliance.model = preset.name.clone();
            appliance.position = Some(Vec3::default());
        }
        appliance
    }
}
