//! # KitchenKit Core
//!
//! Core types, catalog registries and rule sets for KitchenKit.
//! Provides the domain model shared by the designer and settings crates:
//! projects, units, modules, appliances, finishes and the thresholds the
//! layout and validation engines work against.

pub mod data;
pub mod error;
pub mod rules;
pub mod units;

pub use data::{
    init_standard_library, Accessory, Appliance, ApplianceKind, ApplianceLibrary, BrandStandard,
    CatalogProvider, CornerJoint, DoorStyle, Footprint, GlobalStyle, Group, HandleSpec,
    HandleStyle, HardwareSet, IslandFootprint, LayoutMode, MaterialAssignment, ModuleDefinition,
    ModuleLibrary, Project, Rotation, ServicePoint, Unit, UnitCategory, WallId, WorkZone,
};

pub use error::{Error, RejectionReason, Result};

pub use rules::{ClearanceRules, HistorySettings, LayoutRules};

pub use units::MeasurementSystem;
