//! Derived reports.
//!
//! Every report is a pure projection of the current [`Project`]; nothing
//! is cached, so reports always reflect the latest edit.
//!
//! [`Project`]: kitchenkit_core::data::Project

pub mod bom;
pub mod checklist;
pub mod fillers;
pub mod measurements;
pub mod worktop;

pub use bom::{generate_bom, ApplianceLine, Bom, BomLine, BomTotals, HardwareTotals};
pub use checklist::{ready_to_build_checklist, ChecklistItem};
pub use fillers::{auto_fill_fillers, Filler};
pub use measurements::{measurement_report, IslandOffset, MeasurementReport, WallRuns};
pub use worktop::{auto_generate_worktop, total_worktop_length, JointType, WorktopSegment, WorktopSpan};
