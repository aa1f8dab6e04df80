//! Cabinet accessories (inserts, pull-outs, organizers).

use serde::{Deserialize, Serialize};

use super::catalog::UnitCategory;

/// An insert or fitting that can be added to a compatible unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub id: String,
    pub name: String,
    /// Where in the cabinet the accessory sits ("drawer", "door", ...)
    pub compartment: String,
    pub compatible_categories: Vec<UnitCategory>,
    /// Narrowest unit the accessory fits (cm)
    pub min_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl Accessory {
    pub fn fits_category(&self, category: UnitCategory) -> bool {
        self.compatible_categories.contains(&category)
    }

    pub fn cutlery_insert() -> Self {
        preset(
            "cutlery",
            "Cutlery insert",
            "drawer",
            &[UnitCategory::Base],
            60.0,
            "ACC-CUT",
        )
    }

    pub fn waste_sorter() -> Self {
        preset(
            "waste-sorter",
            "Waste sorter",
            "door",
            &[UnitCategory::Base],
            45.0,
            "ACC-WST",
        )
    }

    pub fn spice_pull_out() -> Self {
        preset(
            "spice-pull-out",
            "Spice pull-out",
            "door",
            &[UnitCategory::Base, UnitCategory::Wall, UnitCategory::Tall],
            15.0,
            "ACC-SPC",
        )
    }

    pub fn plate_rack() -> Self {
        preset(
            "plate-rack",
            "Plate rack",
            "shelf",
            &[UnitCategory::Wall],
            60.0,
            "ACC-PLR",
        )
    }

    pub fn tray_divider() -> Self {
        preset(
            "tray-divider",
            "Tray divider",
            "door",
            &[UnitCategory::Base, UnitCategory::Tall, UnitCategory::Pantry],
            30.0,
            "ACC-TRD",
        )
    }

    /// All built-in accessory presets.
    pub fn presets() -> Vec<Accessory> {
        vec![
            Self::cutlery_insert(),
            Self::waste_sorter(),
            Self::spice_pull_out(),
            Self::plate_rack(),
            Self::tray_divider(),
        ]
    }
}

fn preset(
    id: &str,
    name: &str,
    compartment: &str,
    categories: &[UnitCategory],
    min_width: f64,
    sku: &str,
) -> Accessory {
    Accessory {
        id: id.to_string(),
        name: name.to_string(),
        compartment: compartment.to_string(),
        compatible_categories: categories.to_vec(),
        min_width,
        sku: Some(sku.to_string()),
    }
}
