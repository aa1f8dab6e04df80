//! Style presets, appliances and footprint edits.

use std::sync::Arc;

use kitchenkit_core::data::{
    Appliance, Footprint, GlobalStyle, IslandFootprint, MaterialAssignment, Project, WallId,
};

use super::{LayoutEngine, StyleScope};

impl LayoutEngine {
    pub fn set_global_style(&self, project: &Project, style: GlobalStyle) -> Project {
        Project {
            global_style: style,
            ..project.clone()
        }
    }

    pub fn set_material_preset(&self, project: &Project, preset: MaterialAssignment) -> Project {
        Project {
            material_preset: preset,
            ..project.clone()
        }
    }

    /// Stamp the project's global style onto the units in `scope`.
    pub fn apply_global_style(&self, project: &Project, scope: &StyleScope) -> Project {
        let style = &project.global_style;
        let units = project
            .units
            .iter()
            .map(|u| {
                let mut unit = u.clone();
                if scope.includes(u) {
                    unit.door_style = style.cabinet_door_style;
                    unit.materials.body = style.cabinet_body_color.clone();
                    unit.materials.door = style.cabinet_door_color.clone();
                    unit.handle.style = Some(style.handle_style);
                    unit.handle.color = style.handle_color.clone();
                }
                unit
            })
            .collect();
        project.with_units(units)
    }

    /// Stamp the project's material preset onto the units in `scope`.
    pub fn apply_material_preset(&self, project: &Project, scope: &StyleScope) -> Project {
        let units = project
            .units
            .iter()
            .map(|u| {
                let mut unit = u.clone();
                if scope.includes(u) {
                    unit.materials = project.material_preset.clone();
                }
                unit
            })
            .collect();
        project.with_units(units)
    }

    /// Add an appliance; an appliance with the same id is left in place.
    pub fn add_appliance(&self, project: &Project, appliance: Appliance) -> Project {
        if project.appliance(&appliance.id).is_some() {
            tracing::debug!(appliance = %appliance.id, "appliance id already present, skipping add");
            return project.clone();
        }
        let mut appliances = (*project.appliances).clone();
        appliances.push(appliance);
        Project {
            appliances: Arc::new(appliances),
            ..project.clone()
        }
    }

    /// Replace the appliance with the same id.
    pub fn update_appliance(&self, project: &Project, appliance: Appliance) -> Project {
        let Some(index) = project.appliances.iter().position(|a| a.id == appliance.id) else {
            tracing::debug!(appliance = %appliance.id, "appliance not found, skipping update");
            return project.clone();
        };
        let mut appliances = (*project.appliances).clone();
        appliances[index] = appliance;
        Project {
            appliances: Arc::new(appliances),
            ..project.clone()
        }
    }

    pub fn remove_appliance(&self, project: &Project, id: &str) -> Project {
        if project.appliance(id).is_none() {
            tracing::debug!(appliance = id, "appliance not found, skipping remove");
            return project.clone();
        }
        let appliances = project
            .appliances
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .collect();
        Project {
            appliances: Arc::new(appliances),
            ..project.clone()
        }
    }

    /// Set the length of a wall run.
    ///
    /// Wall C is only set when the layout uses it; the island run is sized
    /// through [`LayoutEngine::set_island`].
    pub fn set_wall_length(&self, project: &Project, wall: WallId, length: f64) -> Project {
        let mut footprint = project.footprint.clone();
        match wall {
            WallId::A => footprint.wall_a = length,
            WallId::B => footprint.wall_b = length,
            WallId::C if project.mode.has_wall_c() => footprint.wall_c = Some(length),
            WallId::C | WallId::Island => {
                tracing::debug!(%wall, mode = project.mode.code(), "wall length not settable, skipping");
                return project.clone();
            }
        }
        with_footprint(project, footprint)
    }

    pub fn set_aisle_min(&self, project: &Project, aisle: f64) -> Project {
        with_footprint(
            project,
            Footprint {
                aisle_min: aisle,
                ..project.footprint.clone()
            },
        )
    }

    /// Set or clear the island rectangle.
    pub fn set_island(&self, project: &Project, island: Option<IslandFootprint>) -> Project {
        with_footprint(
            project,
            Footprint {
                island,
                ..project.footprint.clone()
            },
        )
    }
}

fn with_footprint(project: &Project, footprint: Footprint) -> Project {
    Project {
        footprint,
        ..project.clone()
    }
}
