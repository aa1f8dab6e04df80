//! Planner state: the single editing context for one project.
//!
//! Wraps the current [`Project`] together with its undo history, the layout
//! engine and the clearance rules, and dispatches every edit through the
//! engine so that history is recorded consistently.
//!
//! This module is split into submodules:
//! - `units`: unit creation, movement, grouping and accessories
//! - `styling`: style presets, appliances and footprint edits
//! - `history`: undo/redo and interaction bracketing
//! - `file_io`: save/load, export/import and store persistence

mod file_io;
mod history;
mod styling;
mod units;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use kitchenkit_core::data::{LayoutMode, Project};
use kitchenkit_core::ClearanceRules;

use crate::history::{HistoryManager, Snapshot};
use crate::layout::LayoutEngine;
use crate::reports::{
    auto_fill_fillers, auto_generate_worktop, generate_bom, measurement_report,
    ready_to_build_checklist, Bom, ChecklistItem, Filler, MeasurementReport, WorktopSegment,
};
use crate::validation::{
    detect_collisions, ergonomic_warnings, units_out_of_bounds, validate_layout,
    ErgonomicWarning, OutOfBounds,
};

/// The currently selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Unit(String),
    Appliance(String),
}

/// Planner state for UI integration
#[derive(Debug, Clone)]
pub struct PlannerState {
    pub(crate) project: Project,
    pub(crate) history: HistoryManager,
    pub engine: LayoutEngine,
    pub clearance: ClearanceRules,
    pub selection: Option<Selection>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    /// Creation time read from the file the project came from
    pub(crate) created: Option<DateTime<Utc>>,
}

impl PlannerState {
    /// Creates a planner around an existing project.
    pub fn new(project: Project) -> Self {
        Self {
            project,
            history: HistoryManager::default(),
            engine: LayoutEngine::default(),
            clearance: ClearanceRules::default(),
            selection: None,
            current_file_path: None,
            is_modified: false,
            created: None,
        }
    }

    /// Replace the engine rules, clearance thresholds and history depth.
    pub fn with_settings(
        mut self,
        engine: LayoutEngine,
        clearance: ClearanceRules,
        history_capacity: usize,
    ) -> Self {
        self.engine = engine;
        self.clearance = clearance;
        self.history = HistoryManager::new(history_capacity);
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Start over with the template kitchen for `mode`.
    pub fn new_project(&mut self, name: &str, mode: LayoutMode) {
        self.replace_project(Project::new(name, mode));
        self.current_file_path = None;
        self.created = None;
        self.is_modified = false;
        tracing::info!(mode = %mode, "New project");
    }

    /// Switch the kitchen shape, regenerating the template. Clears history.
    pub fn switch_layout_mode(&mut self, mode: LayoutMode) {
        if mode == self.project.mode {
            return;
        }
        let next = self.engine.switch_layout_mode(&self.project, mode);
        self.replace_project(next);
        self.is_modified = true;
    }

    /// Install `project` as the current one, dropping history and selection.
    pub(crate) fn replace_project(&mut self, project: Project) {
        self.project = project;
        self.history.clear();
        self.selection = None;
    }

    /// Run an engine operation, recording history only if it changed
    /// something. Returns whether the project changed.
    pub(crate) fn apply(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&LayoutEngine, &Project) -> Project,
    ) -> bool {
        let next = f(&self.engine, &self.project);
        if next == self.project {
            tracing::debug!(op, "no change, history untouched");
            return false;
        }
        self.history.push(Snapshot::of(&self.project));
        self.project = next;
        self.is_modified = true;
        true
    }

    /// Unit overlap pairs on the same wall.
    pub fn collisions(&self) -> Vec<(String, String)> {
        detect_collisions(&self.project.units)
    }

    /// Clearance and collision problems.
    pub fn validation(&self) -> Vec<String> {
        validate_layout(&self.project, &self.clearance)
    }

    pub fn ergonomics(&self) -> Vec<ErgonomicWarning> {
        ergonomic_warnings(&self.project, &self.clearance)
    }

    pub fn out_of_bounds(&self) -> Vec<OutOfBounds> {
        units_out_of_bounds(&self.project)
    }

    pub fn bom(&self) -> Bom {
        generate_bom(&self.project)
    }

    pub fn worktop(&self) -> Vec<WorktopSegment> {
        auto_generate_worktop(&self.project)
    }

    pub fn fillers(&self) -> Vec<Filler> {
        auto_fill_fillers(&self.project)
    }

    pub fn measurements(&self) -> MeasurementReport {
        measurement_report(&self.project)
    }

    pub fn checklist(&self) -> Vec<ChecklistItem> {
        ready_to_build_checklist(&self.project, &self.clearance)
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new(Project::new("Untitled Kitchen", LayoutMode::L))
    }
}
