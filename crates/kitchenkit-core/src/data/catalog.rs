//! Module catalog
//!
//! This module provides:
//! - Cabinet categories and module sub-configurations (drawers, corners, super units)
//! - Catalog module definitions (immutable templates stamped into placed units)
//! - Brand standards (permitted widths, heights and depths)
//! - Module library management and lookup
//! - Standard catalog initialization

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::style::HardwareSet;

/// Cabinet categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitCategory {
    /// Floor-standing cabinet under the worktop
    Base,
    /// Wall-hung cabinet
    Wall,
    /// Full-height cabinet
    Tall,
    /// Housing for a built-in appliance
    ApplianceHousing,
    /// Pantry / larder
    Pantry,
}

impl UnitCategory {
    pub fn all() -> &'static [UnitCategory] {
        &[
            UnitCategory::Base,
            UnitCategory::Wall,
            UnitCategory::Tall,
            UnitCategory::ApplianceHousing,
            UnitCategory::Pantry,
        ]
    }

    /// Hardware fitted by default to a freshly placed unit of this category.
    pub fn default_hardware(self) -> HardwareSet {
        match self {
            Self::Base => HardwareSet::new(4, 0, 0, "Movento", "Blum"),
            Self::Wall => HardwareSet::new(2, 0, 1, "Aventos", "Blum"),
            Self::Tall => HardwareSet::new(5, 0, 0, "ClipTop", "Blum"),
            Self::ApplianceHousing => HardwareSet::new(4, 0, 0, "ClipTop", "Blum"),
            Self::Pantry => HardwareSet::new(4, 2, 0, "Legrabox", "Blum"),
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Wall => write!(f, "wall"),
            Self::Tall => write!(f, "tall"),
            Self::ApplianceHousing => write!(f, "appliance housing"),
            Self::Pantry => write!(f, "pantry"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawerType {
    Single,
    Double,
    Triple,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CornerType {
    Blind,
    Carousel,
    LDrawer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PantryStyle {
    FullPullOut,
    InternalPullOut,
    MixedShelves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DoorType {
    Single,
    Double,
    Pocket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningSide {
    Left,
    Right,
}

/// Configuration of a full-height "super unit" (pantry or appliance tower).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pantry_style: Option<PantryStyle>,
    #[serde(default)]
    pub appliance_tower: bool,
    pub door_type: DoorType,
    pub opening_side: OpeningSide,
}

/// Immutable catalog template for a cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    pub id: String,
    pub name: String,
    pub category: UnitCategory,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub min_width: f64,
    pub max_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_type: Option<DrawerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_type: Option<CornerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_unit: Option<SuperUnit>,
}

impl ModuleDefinition {
    /// Create a plain module with its width range pinned to the nominal width.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: UnitCategory,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            width,
            height,
            depth,
            sku: None,
            min_width: width,
            max_width: width,
            drawer_type: None,
            corner_type: None,
            super_unit: None,
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_width_range(mut self, min_width: f64, max_width: f64) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    pub fn with_drawers(mut self, drawer_type: DrawerType) -> Self {
        self.drawer_type = Some(drawer_type);
        self
    }

    pub fn with_corner(mut self, corner_type: CornerType) -> Self {
        self.corner_type = Some(corner_type);
        self
    }

    pub fn with_super_unit(mut self, super_unit: SuperUnit) -> Self {
        self.super_unit = Some(super_unit);
        self
    }

    /// Whether `width` lies inside the module's adjustable range.
    pub fn accepts_width(&self, width: f64) -> bool {
        width >= self.min_width && width <= self.max_width
    }
}

/// Resolves module identifiers to catalog entries.
pub trait CatalogProvider {
    fn lookup_module(&self, id: &str) -> Option<&ModuleDefinition>;
}

/// Module library, preserving registration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ModuleDefinition>", into = "Vec<ModuleDefinition>")]
pub struct ModuleLibrary {
    modules: Vec<ModuleDefinition>,
    index: HashMap<String, usize>,
}

impl ModuleLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module; a module with the same id is replaced in place.
    pub fn add_module(&mut self, module: ModuleDefinition) {
        match self.index.get(&module.id) {
            Some(&pos) => self.modules[pos] = module,
            None => {
                self.index.insert(module.id.clone(), self.modules.len());
                self.modules.push(module);
            }
        }
    }

    /// Get a module by ID
    pub fn get_module(&self, id: &str) -> Option<&ModuleDefinition> {
        self.index.get(id).map(|&pos| &self.modules[pos])
    }

    /// All modules in registration order
    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    /// Get all modules in a specific category
    pub fn modules_by_category(&self, category: UnitCategory) -> Vec<&ModuleDefinition> {
        self.modules
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Search modules by name or SKU (partial match, case-insensitive)
    pub fn search(&self, query: &str) -> Vec<&ModuleDefinition> {
        let query_lower = query.to_lowercase();
        self.modules
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&query_lower)
                    || m
                        .sku
                        .as_deref()
                        .is_some_and(|sku| sku.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl CatalogProvider for ModuleLibrary {
    fn lookup_module(&self, id: &str) -> Option<&ModuleDefinition> {
        self.get_module(id)
    }
}

impl From<Vec<ModuleDefinition>> for ModuleLibrary {
    fn from(modules: Vec<ModuleDefinition>) -> Self {
        let mut library = ModuleLibrary::new();
        for module in modules {
            library.add_module(module);
        }
        library
    }
}

impl From<ModuleLibrary> for Vec<ModuleDefinition> {
    fn from(library: ModuleLibrary) -> Self {
        library.modules
    }
}

/// Permitted dimensions for a cabinet manufacturer's range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStandard {
    pub name: String,
    pub base_widths: Vec<f64>,
    pub wall_heights: Vec<f64>,
    pub depths: Vec<f64>,
}

impl BrandStandard {
    pub fn allows_base_width(&self, width: f64) -> bool {
        self.base_widths.iter().any(|w| (w - width).abs() < f64::EPSILON)
    }
}

impl Default for BrandStandard {
    fn default() -> Self {
        Self {
            name: "EU-600".to_string(),
            base_widths: vec![30.0, 40.0, 45.0, 50.0, 60.0, 80.0, 90.0, 100.0, 120.0],
            wall_heights: vec![70.0, 90.0, 100.0],
            depths: vec![32.0, 37.0, 45.0, 56.0, 60.0],
        }
    }
}

/// Initialize the standard module library
pub fn init_standard_library() -> ModuleLibrary {
    let mut library = ModuleLibrary::new();

    library.add_module(
        ModuleDefinition::new("base-60", "Base 60", UnitCategory::Base, 60.0, 72.0, 56.0)
            .with_width_range(50.0, 100.0)
            .with_sku("B60"),
    );
    library.add_module(
        ModuleDefinition::new(
            "base-draw-90",
            "Drawer Base 90",
            UnitCategory::Base,
            90.0,
            72.0,
            56.0,
        )
        .with_width_range(80.0, 100.0)
        .with_drawers(DrawerType::Triple)
        .with_sku("BD90"),
    );
    library.add_module(
        ModuleDefinition::new("wall-80", "Wall 80", UnitCategory::Wall, 80.0, 90.0, 32.0)
            .with_width_range(60.0, 100.0)
            .with_sku("W80"),
    );
    library.add_module(
        ModuleDefinition::new("tall-60", "Tall 60", UnitCategory::Tall, 60.0, 220.0, 60.0)
            .with_width_range(50.0, 80.0)
            .with_sku("T60"),
    );
    library.add_module(
        ModuleDefinition::new(
            "pantry-super",
            "Super Pantry",
            UnitCategory::Pantry,
            60.0,
            220.0,
            60.0,
        )
        .with_width_range(50.0, 80.0)
        .with_sku("SP60")
        .with_super_unit(SuperUnit {
            pantry_style: Some(PantryStyle::FullPullOut),
            appliance_tower: false,
            door_type: DoorType::Single,
            opening_side: OpeningSide::Left,
        }),
    );
    library.add_module(
        ModuleDefinition::new(
            "corner-carousel",
            "Corner Carousel",
            UnitCategory::Base,
            100.0,
            72.0,
            100.0,
        )
        .with_width_range(90.0, 110.0)
        .with_corner(CornerType::Carousel)
        .with_sku("CC100"),
    );
    library.add_module(
        ModuleDefinition::new(
            "appliance-tower",
            "Appliance Tower",
            UnitCategory::ApplianceHousing,
            60.0,
            220.0,
            60.0,
        )
        .with_width_range(60.0, 70.0)
        .with_sku("AT60")
        .with_super_unit(SuperUnit {
            pantry_style: None,
            appliance_tower: true,
            door_type: DoorType::Double,
            opening_side: OpeningSide::Right,
        }),
    );

    tracing::debug!(modules = library.len(), "standard module library initialized");
    library
}
