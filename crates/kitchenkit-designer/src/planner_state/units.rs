//! Unit editing and selection for planner state.

use kitchenkit_core::data::{Accessory, Unit, WallId};

use super::{PlannerState, Selection};
use crate::layout::Axis;

impl PlannerState {
    pub fn select_unit(&mut self, id: &str) {
        if self.project.has_unit(id) {
            self.selection = Some(Selection::Unit(id.to_string()));
        }
    }

    pub fn select_appliance(&mut self, id: &str) {
        if self.project.appliance(id).is_some() {
            self.selection = Some(Selection::Appliance(id.to_string()));
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selected unit, if the selection is a unit that still exists.
    pub fn selected_unit(&self) -> Option<&Unit> {
        match &self.selection {
            Some(Selection::Unit(id)) => self.project.unit(id),
            _ => None,
        }
    }

    /// Add a unit and select it.
    pub fn create_unit(&mut self, module_id: &str, wall: WallId) -> bool {
        let changed = self.apply("create_unit", |engine, project| {
            engine.create_unit(project, module_id, wall)
        });
        if changed {
            if let Some(unit) = self.project.units.last() {
                self.selection = Some(Selection::Unit(unit.id.clone()));
            }
        }
        changed
    }

    /// Reposition a unit without recording history. Drags should be
    /// bracketed with `begin_interaction` / `commit_interaction`.
    pub fn move_unit(&mut self, id: &str, x: f64, y: f64) -> bool {
        let next = self.engine.move_unit(&self.project, id, x, y);
        if next == self.project {
            return false;
        }
        self.project = next;
        self.is_modified = true;
        true
    }

    pub fn rotate_unit(&mut self, id: &str) -> bool {
        self.apply("rotate_unit", |engine, project| engine.rotate_unit(project, id))
    }

    pub fn resize_unit(&mut self, id: &str, width: f64) -> bool {
        self.apply("resize_unit", |engine, project| {
            engine.resize_unit(project, id, width)
        })
    }

    /// Edit arbitrary unit properties. Applies to locked units too.
    pub fn update_unit(&mut self, id: &str, f: impl FnOnce(&mut Unit)) -> bool {
        self.apply("update_unit", |engine, project| {
            engine.update_unit(project, id, f)
        })
    }

    pub fn toggle_lock(&mut self, id: &str) -> bool {
        self.apply("toggle_lock", |engine, project| engine.toggle_lock(project, id))
    }

    /// Duplicate a unit and select the copy.
    pub fn duplicate_unit(&mut self, id: &str) -> bool {
        let changed = self.apply("duplicate_unit", |engine, project| {
            engine.duplicate_unit(project, id)
        });
        if changed {
            if let Some(unit) = self.project.units.last() {
                self.selection = Some(Selection::Unit(unit.id.clone()));
            }
        }
        changed
    }

    pub fn delete_unit(&mut self, id: &str) -> bool {
        let changed = self.apply("delete_unit", |engine, project| engine.delete_unit(project, id));
        if changed && self.selection == Some(Selection::Unit(id.to_string())) {
            self.selection = None;
        }
        changed
    }

    /// Delete whatever is selected, unit or appliance.
    pub fn delete_selected(&mut self) -> bool {
        match self.selection.clone() {
            Some(Selection::Unit(id)) => self.delete_unit(&id),
            Some(Selection::Appliance(id)) => self.remove_appliance(&id),
            None => false,
        }
    }

    pub fn align_units(&mut self, ids: &[String], axis: Axis) -> bool {
        self.apply("align_units", |engine, project| {
            engine.align_units(project, ids, axis)
        })
    }

    pub fn snap_units(&mut self) -> bool {
        self.apply("snap_units", |engine, project| engine.snap_units(project))
    }

    pub fn create_group(&mut self, ids: &[String], name: &str) -> bool {
        self.apply("create_group", |engine, project| {
            engine.create_group(project, ids, name)
        })
    }

    pub fn assign_accessory(&mut self, unit_id: &str, accessory: &Accessory) -> bool {
        self.apply("assign_accessory", |engine, project| {
            engine.assign_accessory(project, unit_id, accessory)
        })
    }
}
