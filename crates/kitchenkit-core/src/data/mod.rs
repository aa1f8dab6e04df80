//! Domain model for kitchen plans
//!
//! This module provides:
//! - Layout shapes, wall identifiers and corner joints
//! - The module catalog and brand standards
//! - Placed units, accessories and appliances
//! - Finishes, hardware and global style presets
//! - The project aggregate and its template kitchens

pub mod accessories;
pub mod appliance;
pub mod appliance_presets;
pub mod catalog;
pub mod layout;
pub mod project;
pub mod style;
pub mod templates;
pub mod unit;

pub use accessories::Accessory;
pub use appliance::{Appliance, ApplianceKind, ServiceKind, ServicePoint, WorkZone};
pub use appliance_presets::{ApplianceLibrary, AppliancePlacement, AppliancePreset};
pub use catalog::{
    init_standard_library, BrandStandard, CatalogProvider, CornerType, DoorType, DrawerType,
    ModuleDefinition, ModuleLibrary, OpeningSide, PantryStyle, SuperUnit, UnitCategory,
};
pub use layout::{CornerJoint, LayoutMode, Vec3, WallId};
pub use project::{Footprint, Group, IslandFootprint, Project};
pub use style::{
    BacksplashHeight, CountertopConfig, CountertopMaterial, DoorStyle, EdgeProfile, GlobalStyle,
    HandlePlacement, HandleSpec, HandleStyle, HardwareSet, HingeSide, LightingConfig,
    MaterialAssignment, PendantStyle,
};
pub use templates::{generate_template, template_slots, TemplateSlot};
pub use unit::{Rotation, Unit};
