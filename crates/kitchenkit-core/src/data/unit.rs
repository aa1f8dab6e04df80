//! Placed cabinet units.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::accessories::Accessory;
use super::catalog::{CornerType, DrawerType, ModuleDefinition, UnitCategory};
use super::layout::WallId;
use super::style::{DoorStyle, HandleSpec, HardwareSet, HingeSide, MaterialAssignment};

/// Quarter-turn rotation about the vertical axis.
///
/// Serialized as the number of degrees. Deserialization also accepts
/// radians and arbitrary degree values, snapping to the nearest quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Advance by a quarter turn, wrapping at 360.
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// Facing of a unit placed against `wall`.
    pub fn for_wall(wall: WallId) -> Self {
        match wall {
            WallId::B => Self::Deg90,
            WallId::C => Self::Deg180,
            WallId::A | WallId::Island => Self::Deg0,
        }
    }

    fn from_quarter_turns(turns: i64) -> Self {
        match turns.rem_euclid(4) {
            1 => Self::Deg90,
            2 => Self::Deg180,
            3 => Self::Deg270,
            _ => Self::Deg0,
        }
    }
}

impl TryFrom<f64> for Rotation {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(format!("invalid rotation: {}", value));
        }
        // Values within one full turn of radians are treated as radians.
        let degrees = if value.abs() <= std::f64::consts::TAU && value.fract() != 0.0 {
            value.to_degrees()
        } else {
            value
        };
        Ok(Self::from_quarter_turns((degrees / 90.0).round() as i64))
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A cabinet placed in the plan.
///
/// Catalog facts (`sku`, `drawer_type`, `corner_type`) are copied at
/// instantiation so later catalog edits never affect placed units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub module_id: String,
    #[serde(default)]
    pub name: String,
    pub category: UnitCategory,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub wall: WallId,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default)]
    pub materials: MaterialAssignment,
    #[serde(default)]
    pub hardware: HardwareSet,
    #[serde(default)]
    pub handle: HandleSpec,
    #[serde(default)]
    pub door_style: DoorStyle,
    #[serde(default)]
    pub hinge_side: HingeSide,
    #[serde(default)]
    pub accessories: Vec<Accessory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_type: Option<DrawerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_type: Option<CornerType>,
}

impl Unit {
    /// Stamp a unit from a catalog module at the given position.
    ///
    /// Hardware comes from the category defaults and the handle is the
    /// standard bar; materials are left unassigned for the caller to fill.
    pub fn from_module(
        id: impl Into<String>,
        module: &ModuleDefinition,
        wall: WallId,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            module_id: module.id.clone(),
            name: module.name.clone(),
            category: module.category,
            width: module.width,
            height: module.height,
            depth: module.depth,
            x,
            y,
            wall,
            rotation: Rotation::for_wall(wall),
            locked: false,
            group_id: None,
            materials: MaterialAssignment::default(),
            hardware: module.category.default_hardware(),
            handle: HandleSpec::standard(),
            door_style: DoorStyle::default(),
            hinge_side: HingeSide::default(),
            accessories: Vec::new(),
            sku: module.sku.clone(),
            drawer_type: module.drawer_type,
            corner_type: module.corner_type,
        }
    }

    pub fn with_materials(mut self, materials: MaterialAssignment) -> Self {
        self.materials = materials;
        self
    }

    /// Right-hand end of the unit along its run.
    pub fn end_x(&self) -> f64 {
        self.x + self.width
    }

    /// Whether the unit opens as drawers rather than doors.
    pub fn is_drawer(&self) -> bool {
        self.drawer_type.is_some() || self.module_id.contains("draw")
    }
}
