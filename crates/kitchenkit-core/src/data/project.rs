//! The project aggregate: footprint, units, appliances and presets.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::appliance::{Appliance, ServicePoint};
use super::catalog::{init_standard_library, BrandStandard, ModuleLibrary};
use super::layout::{LayoutMode, WallId};
use super::style::{CountertopConfig, GlobalStyle, LightingConfig, MaterialAssignment};
use super::templates::generate_template;
use super::unit::Unit;

pub const DEFAULT_WALL_A: f64 = 360.0;
pub const DEFAULT_WALL_B: f64 = 300.0;
pub const DEFAULT_WALL_C: f64 = 320.0;
pub const DEFAULT_AISLE: f64 = 100.0;

/// Island or peninsula rectangle on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IslandFootprint {
    pub width: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for IslandFootprint {
    fn default() -> Self {
        Self {
            width: 180.0,
            depth: 90.0,
            x: 110.0,
            y: 120.0,
        }
    }
}

/// Room dimensions the plan is laid out in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footprint {
    pub wall_a: f64,
    pub wall_b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_c: Option<f64>,
    pub aisle_min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub island: Option<IslandFootprint>,
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            wall_a: DEFAULT_WALL_A,
            wall_b: DEFAULT_WALL_B,
            wall_c: None,
            aisle_min: DEFAULT_AISLE,
            island: None,
        }
    }
}

impl Footprint {
    /// Default footprint for a layout mode.
    pub fn for_mode(mode: LayoutMode) -> Self {
        Self::default().adapted_to(mode)
    }

    /// Keep or default wall C and the island according to `mode`, dropping
    /// whichever the mode does not use.
    pub fn adapted_to(&self, mode: LayoutMode) -> Self {
        Self {
            wall_c: mode
                .has_wall_c()
                .then(|| self.wall_c.unwrap_or(DEFAULT_WALL_C)),
            island: mode
                .has_island_footprint()
                .then(|| self.island.unwrap_or_default()),
            ..self.clone()
        }
    }

    /// Usable length along a wall run; the island run uses the island width.
    pub fn wall_length(&self, wall: WallId) -> Option<f64> {
        match wall {
            WallId::A => Some(self.wall_a),
            WallId::B => Some(self.wall_b),
            WallId::C => self.wall_c,
            WallId::Island => self.island.map(|i| i.width),
        }
    }
}

/// Organizational grouping of units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub unit_ids: Vec<String>,
}

/// The aggregate root of a kitchen plan.
///
/// Collections are held behind `Arc` so that history snapshots share
/// unchanged data with the live project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub mode: LayoutMode,
    #[serde(default)]
    pub standard: BrandStandard,
    pub footprint: Footprint,
    #[serde(default)]
    pub units: Arc<Vec<Unit>>,
    #[serde(default = "standard_library", alias = "modulesLibrary")]
    pub modules: Arc<ModuleLibrary>,
    #[serde(default)]
    pub appliances: Arc<Vec<Appliance>>,
    #[serde(default)]
    pub service_points: Vec<ServicePoint>,
    #[serde(default = "MaterialAssignment::standard")]
    pub material_preset: MaterialAssignment,
    #[serde(default)]
    pub global_style: GlobalStyle,
    #[serde(default)]
    pub countertop: CountertopConfig,
    #[serde(default)]
    pub lighting: LightingConfig,
    #[serde(default)]
    pub groups: Arc<Vec<Group>>,
}

fn standard_library() -> Arc<ModuleLibrary> {
    Arc::new(init_standard_library())
}

impl Project {
    /// New project with the standard catalog and the template kitchen for `mode`.
    pub fn new(name: impl Into<String>, mode: LayoutMode) -> Self {
        let modules = init_standard_library();
        let material_preset = MaterialAssignment::standard();
        let units = generate_template(mode, &modules, &material_preset);

        Self {
            id: format!("project-{}", uuid::Uuid::new_v4()),
            name: name.into(),
            mode,
            standard: BrandStandard::default(),
            footprint: Footprint::for_mode(mode),
            units: Arc::new(units),
            modules: Arc::new(modules),
            appliances: Arc::new(Vec::new()),
            service_points: Vec::new(),
            material_preset,
            global_style: GlobalStyle::default(),
            countertop: CountertopConfig::default(),
            lighting: LightingConfig::default(),
            groups: Arc::new(Vec::new()),
        }
    }

    /// Same project with no units, appliances or groups.
    pub fn empty(name: impl Into<String>, mode: LayoutMode) -> Self {
        Self {
            units: Arc::new(Vec::new()),
            ..Self::new(name, mode)
        }
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn appliance(&self, id: &str) -> Option<&Appliance> {
        self.appliances.iter().find(|a| a.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn has_unit(&self, id: &str) -> bool {
        self.unit(id).is_some()
    }

    /// Units on `wall`, in array order.
    pub fn units_on_wall(&self, wall: WallId) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.wall == wall)
    }

    /// Copy with `units` replaced.
    pub fn with_units(&self, units: Vec<Unit>) -> Self {
        Self {
            units: Arc::new(units),
            ..self.clone()
        }
    }
}
