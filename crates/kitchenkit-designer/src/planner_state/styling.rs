//! Style, appliance and footprint edits for planner state.

use kitchenkit_core::data::{Appliance, GlobalStyle, IslandFootprint, MaterialAssignment, WallId};

use super::{PlannerState, Selection};
use crate::layout::StyleScope;

impl PlannerState {
    pub fn set_global_style(&mut self, style: GlobalStyle) -> bool {
        self.apply("set_global_style", |engine, project| {
            engine.set_global_style(project, style)
        })
    }

    pub fn set_material_preset(&mut self, preset: MaterialAssignment) -> bool {
        self.apply("set_material_preset", |engine, project| {
            engine.set_material_preset(project, preset)
        })
    }

    pub fn apply_global_style(&mut self, scope: &StyleScope) -> bool {
        self.apply("apply_global_style", |engine, project| {
            engine.apply_global_style(project, scope)
        })
    }

    pub fn apply_material_preset(&mut self, scope: &StyleScope) -> bool {
        self.apply("apply_material_preset", |engine, project| {
            engine.apply_material_preset(project, scope)
        })
    }

    pub fn add_appliance(&mut self, appliance: Appliance) -> bool {
        self.apply("add_appliance", |engine, project| {
            engine.add_appliance(project, appliance)
        })
    }

    pub fn update_appliance(&mut self, appliance: Appliance) -> bool {
        self.apply("update_appliance", |engine, project| {
            engine.update_appliance(project, appliance)
        })
    }

    pub fn remove_appliance(&mut self, id: &str) -> bool {
        let changed = self.apply("remove_appliance", |engine, project| {
            engine.remove_appliance(project, id)
        });
        if changed && self.selection == Some(Selection::Appliance(id.to_string())) {
            self.selection = None;
        }
        changed
    }

    pub fn set_wall_length(&mut self, wall: WallId, length: f64) -> bool {
        self.apply("set_wall_length", |engine, project| {
            engine.set_wall_length(project, wall, length)
        })
    }

    pub fn set_aisle_min(&mut self, aisle: f64) -> bool {
        self.apply("set_aisle_min", |engine, project| {
            engine.set_aisle_min(project, aisle)
        })
    }

    pub fn set_island(&mut self, island: Option<IslandFootprint>) -> bool {
        self.apply("set_island", |engine, project| engine.set_island(project, island))
    }
}
