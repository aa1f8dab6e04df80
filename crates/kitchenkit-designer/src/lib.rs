//! # KitchenKit Designer
//!
//! This crate provides the layout and state engine for kitchen plans. It
//! combines unit placement, geometry checks, derived reports and undo/redo
//! into a single editing context.
//!
//! ## Core Components
//!
//! ### Layout
//! - **Layout Engine**: Create, move, rotate, snap, align and group units
//! - **Mode Switch**: Regenerate the template kitchen for a new shape while
//!   keeping the user's customizations
//! - **Styling**: Global style and material presets, appliances, footprint
//!
//! ### Analysis
//! - **Validation**: Collisions, aisle and drawer clearances, work triangle
//! - **Reports**: Bill of materials, worktop segments, fillers,
//!   measurements and the ready-to-build checklist
//!
//! ### State
//! - **History/Undo-Redo**: Bounded snapshot history with drag bracketing
//! - **Planner State**: The editing context that ties it all together
//! - **Import/Export**: JSON project files and pluggable project stores
//!
//! ## Architecture
//!
//! ```text
//! PlannerState
//!   ├── Project (current plan)
//!   ├── LayoutEngine (pure Project -> Project operations)
//!   ├── HistoryManager (snapshots)
//!   └── Reports / Validation (computed on demand)
//!
//! ProjectFile (JSON) <-> ProjectStore (file, memory)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kitchenkit_designer::PlannerState;
//! use kitchenkit_core::{LayoutMode, WallId};
//!
//! let mut planner = PlannerState::default();
//! planner.switch_layout_mode(LayoutMode::U);
//! planner.create_unit("base-60", WallId::C);
//! planner.snap_units();
//!
//! let bom = planner.bom();
//! println!("{} units", bom.totals.total_units);
//! ```

pub mod history;
pub mod layout;
pub mod persistence;
pub mod planner_state;
pub mod reports;
pub mod serialization;
pub mod validation;

pub use history::{HistoryManager, HistoryState, Snapshot, DEFAULT_HISTORY_CAPACITY};
pub use layout::{check_accessory, Axis, LayoutEngine, StyleScope};
pub use persistence::{FileProjectStore, MemoryProjectStore, PersistenceError, ProjectStore};
pub use planner_state::{PlannerState, Selection};
pub use reports::{
    auto_fill_fillers, auto_generate_worktop, generate_bom, measurement_report,
    ready_to_build_checklist, Bom, ChecklistItem, Filler, MeasurementReport, WorktopSegment,
};
pub use serialization::{ProjectFile, ProjectFileError, FILE_FORMAT_VERSION};
pub use validation::{
    detect_collisions, ergonomic_warnings, units_out_of_bounds, validate_layout,
    work_triangle_complete, ErgonomicWarning, OutOfBounds,
};
