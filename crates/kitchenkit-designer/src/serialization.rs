//! Serialization and deserialization for project files.
//!
//! Projects are saved as JSON. The file format is the interchange format
//! for export/import as well as local saves, so import is lenient: only the
//! layout type and the wall list are required and everything else is
//! backfilled with defaults.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use kitchenkit_core::data::{
    init_standard_library, Appliance, BrandStandard, CountertopConfig, DoorStyle, Footprint,
    GlobalStyle, Group, HandleSpec, HandleStyle, HingeSide, IslandFootprint, LayoutMode,
    LightingConfig, MaterialAssignment, ModuleLibrary, Project, Rotation, ServicePoint, Unit,
    UnitCategory, Vec3, WallId,
};
use kitchenkit_core::data::project::{DEFAULT_AISLE, DEFAULT_WALL_A, DEFAULT_WALL_B};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Project file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Highest major version this build can read.
const SUPPORTED_MAJOR_VERSION: u32 = 1;

const DEFAULT_WALL_HEIGHT: f64 = 240.0;
const DEFAULT_WALL_THICKNESS: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ProjectFileError {
    #[error("Project file is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Unsupported project file version {0}")]
    UnsupportedVersion(String),

    #[error("Invalid project file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete project file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    pub layout_type: LayoutMode,
    pub walls: Vec<WallRecord>,
    #[serde(default, alias = "units", deserialize_with = "deserialize_cabinets")]
    pub cabinets: Vec<Unit>,
    #[serde(default)]
    pub appliances: Vec<Appliance>,
    #[serde(default)]
    pub countertop: CountertopConfig,
    #[serde(default)]
    pub island: Option<IslandFootprint>,
    #[serde(default)]
    pub global_style: GlobalStyle,
    #[serde(default)]
    pub lighting: LightingConfig,
    #[serde(default = "MaterialAssignment::standard")]
    pub material_preset: MaterialAssignment,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub service_points: Vec<ServicePoint>,
    #[serde(default = "default_aisle")]
    pub aisle_min: f64,
    #[serde(default)]
    pub standard: BrandStandard,
    #[serde(default, alias = "modulesLibrary", skip_serializing_if = "Option::is_none")]
    pub modules: Option<ModuleLibrary>,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMetadata {
    pub id: String,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: format!("project-{}", uuid::Uuid::new_v4()),
            name: "Untitled Kitchen".to_string(),
            created: now,
            modified: now,
        }
    }
}

/// One wall of the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallRecord {
    pub id: String,
    pub length: f64,
    #[serde(default = "default_wall_height")]
    pub height: f64,
    #[serde(default = "default_wall_thickness")]
    pub thickness: f64,
}

impl WallRecord {
    fn new(wall: WallId, length: f64) -> Self {
        Self {
            id: wall.as_str().to_string(),
            length,
            height: DEFAULT_WALL_HEIGHT,
            thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

/// A cabinet as written by the browser store: scene position, `type`
/// instead of a module id, and flat colour and handle fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreCabinet {
    id: String,
    category: UnitCategory,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    position: Vec3,
    #[serde(default)]
    rotation: Rotation,
    width: f64,
    height: f64,
    depth: f64,
    #[serde(default)]
    door_style: DoorStyle,
    #[serde(default)]
    door_color: String,
    #[serde(default)]
    body_color: String,
    #[serde(default)]
    handle_style: Option<HandleStyle>,
    #[serde(default)]
    handle_color: String,
    #[serde(default)]
    hinge_side: HingeSide,
    #[serde(default)]
    wall_id: Option<String>,
}

impl StoreCabinet {
    fn into_unit(self) -> Unit {
        let wall = match self.wall_id.as_deref().map(str::parse::<WallId>) {
            Some(Ok(wall)) => wall,
            Some(Err(_)) => {
                tracing::warn!(unit = %self.id, "Unknown wall on cabinet, placing on wall A");
                WallId::default()
            }
            None => WallId::default(),
        };
        let kind = if self.kind.is_empty() { "regular" } else { self.kind.as_str() };

        Unit {
            module_id: format!("{}-{}", self.category, kind),
            name: String::new(),
            category: self.category,
            width: self.width,
            height: self.height,
            depth: self.depth,
            x: self.position.x,
            y: 0.0,
            wall,
            rotation: self.rotation,
            locked: false,
            group_id: None,
            materials: MaterialAssignment {
                body: self.body_color,
                color_code: self.door_color.clone(),
                door: self.door_color,
                ..MaterialAssignment::default()
            },
            hardware: self.category.default_hardware(),
            handle: HandleSpec {
                style: self.handle_style,
                color: self.handle_color,
                ..HandleSpec::standard()
            },
            door_style: self.door_style,
            hinge_side: self.hinge_side,
            accessories: Vec::new(),
            sku: None,
            drawer_type: None,
            corner_type: None,
            id: self.id,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CabinetRecord {
    Unit(Box<Unit>),
    Store(StoreCabinet),
}

/// Accept both planner units and store cabinets in `cabinets`/`units`.
fn deserialize_cabinets<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Unit>, D::Error> {
    let records = Vec::<CabinetRecord>::deserialize(deserializer)?;
    Ok(records
        .into_iter()
        .map(|record| match record {
            CabinetRecord::Unit(unit) => *unit,
            CabinetRecord::Store(cabinet) => cabinet.into_unit(),
        })
        .collect())
}

fn default_version() -> String {
    FILE_FORMAT_VERSION.to_string()
}

fn default_aisle() -> f64 {
    DEFAULT_AISLE
}

fn default_wall_height() -> f64 {
    DEFAULT_WALL_HEIGHT
}

fn default_wall_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS
}

impl ProjectFile {
    /// Capture `project` for saving or export.
    pub fn from_project(project: &Project) -> Self {
        let footprint = &project.footprint;
        let mut walls = vec![
            WallRecord::new(WallId::A, footprint.wall_a),
            WallRecord::new(WallId::B, footprint.wall_b),
        ];
        if let Some(length) = footprint.wall_c {
            walls.push(WallRecord::new(WallId::C, length));
        }

        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                id: project.id.clone(),
                name: project.name.clone(),
                created: now,
                modified: now,
            },
            layout_type: project.mode,
            walls,
            cabinets: project.units.to_vec(),
            appliances: project.appliances.to_vec(),
            countertop: project.countertop.clone(),
            island: footprint.island,
            global_style: project.global_style.clone(),
            lighting: project.lighting.clone(),
            material_preset: project.material_preset.clone(),
            groups: project.groups.to_vec(),
            service_points: project.service_points.clone(),
            aisle_min: footprint.aisle_min,
            standard: project.standard.clone(),
            modules: Some((*project.modules).clone()),
        }
    }

    /// Keep an earlier creation time, such as the one read when the project
    /// was loaded.
    pub fn with_created(mut self, created: Option<DateTime<Utc>>) -> Self {
        if let Some(created) = created {
            self.metadata.created = created;
        }
        self
    }

    /// Rebuild a project, backfilling walls and dropping dangling group
    /// references.
    pub fn into_project(self) -> Project {
        let mode = self.layout_type;

        let mut wall_a = None;
        let mut wall_b = None;
        let mut wall_c = None;
        for record in &self.walls {
            match record.id.parse::<WallId>() {
                Ok(WallId::A) => wall_a = Some(record.length),
                Ok(WallId::B) => wall_b = Some(record.length),
                Ok(WallId::C) => wall_c = Some(record.length),
                Ok(WallId::Island) => {}
                Err(_) => tracing::warn!(wall = %record.id, "Ignoring unknown wall in project file"),
            }
        }

        let footprint = Footprint {
            wall_a: wall_a.unwrap_or(DEFAULT_WALL_A),
            wall_b: wall_b.unwrap_or(DEFAULT_WALL_B),
            wall_c,
            aisle_min: self.aisle_min,
            island: self.island,
        }
        .adapted_to(mode);

        let (units, groups) = scrub_group_references(self.cabinets, self.groups);

        Project {
            id: self.metadata.id,
            name: self.metadata.name,
            mode,
            standard: self.standard,
            footprint,
            units: Arc::new(units),
            modules: Arc::new(self.modules.unwrap_or_else(init_standard_library)),
            appliances: Arc::new(self.appliances),
            service_points: self.service_points,
            material_preset: self.material_preset,
            global_style: self.global_style,
            countertop: self.countertop,
            lighting: self.lighting,
            groups: Arc::new(groups),
        }
    }

    pub fn to_json(&self) -> Result<String, ProjectFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and minimally validate a project file.
    pub fn from_json(json: &str) -> Result<Self, ProjectFileError> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        if let Some(version) = value.get("version").and_then(|v| v.as_str()) {
            let major = version
                .split('.')
                .next()
                .and_then(|m| m.trim().parse::<u32>().ok())
                .ok_or_else(|| ProjectFileError::UnsupportedVersion(version.to_string()))?;
            if major > SUPPORTED_MAJOR_VERSION {
                return Err(ProjectFileError::UnsupportedVersion(version.to_string()));
            }
        }
        for field in ["layoutType", "walls"] {
            if value.get(field).map_or(true, |v| v.is_null()) {
                return Err(ProjectFileError::MissingField(field));
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Save project file to disk.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = self.to_json().context("Failed to serialize project")?;
        std::fs::write(path.as_ref(), json).context("Failed to write project file")?;
        tracing::info!(path = %path.as_ref().display(), "Saved project");
        Ok(())
    }

    /// Load project file from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read project file")?;
        let mut file = Self::from_json(&content).context("Failed to parse project file")?;
        file.metadata.modified = Utc::now();
        tracing::info!(path = %path.as_ref().display(), name = %file.metadata.name, "Loaded project");
        Ok(file)
    }
}

/// Clear unit group ids that name no group, and group members that name no
/// unit.
fn scrub_group_references(mut units: Vec<Unit>, mut groups: Vec<Group>) -> (Vec<Unit>, Vec<Group>) {
    let group_ids: HashSet<String> = groups.iter().map(|g| g.id.clone()).collect();
    let unit_ids: HashSet<String> = units.iter().map(|u| u.id.clone()).collect();

    for unit in &mut units {
        if let Some(group_id) = &unit.group_id {
            if !group_ids.contains(group_id) {
                tracing::warn!(unit = %unit.id, group = %group_id, "Dropping reference to missing group");
                unit.group_id = None;
            }
        }
    }
    for group in &mut groups {
        let before = group.unit_ids.len();
        group.unit_ids.retain(|id| unit_ids.contains(id));
        if group.unit_ids.len() != before {
            tracing::warn!(group = %group.id, "Dropping references to missing units");
        }
    }

    (units, groups)
}
