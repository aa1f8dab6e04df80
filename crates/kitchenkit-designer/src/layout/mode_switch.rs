//! Switching the kitchen shape.

use std::collections::HashSet;
use std::sync::Arc;

use kitchenkit_core::data::{generate_template, Group, LayoutMode, Project, Unit};

use super::{unique_id, LayoutEngine};

impl LayoutEngine {
    /// Regenerate the template kitchen for `mode`, reusing existing units.
    ///
    /// Each template slot takes the first unused, unlocked unit of the same
    /// category as its donor: the donor keeps its id, module, dimensions and
    /// finishes but moves to the slot's wall, position and rotation. Slots
    /// without a donor keep the template unit. Locked units and units with
    /// no slot are dropped.
    ///
    /// Donors are consumed in array order and each feeds at most one slot,
    /// so two template bases take the first two unlocked bases.
    pub fn switch_layout_mode(&self, project: &Project, mode: LayoutMode) -> Project {
        let template = generate_template(mode, &project.modules, &project.material_preset);
        let mut used = vec![false; project.units.len()];

        let slots: Vec<(Unit, bool)> = template
            .into_iter()
            .map(|slot| {
                let donor = project
                    .units
                    .iter()
                    .enumerate()
                    .find(|(i, u)| !used[*i] && !u.locked && u.category == slot.category);
                match donor {
                    Some((i, donor)) => {
                        used[i] = true;
                        (transplant(donor, slot), true)
                    }
                    None => (slot, false),
                }
            })
            .collect();

        // Donors keep their ids; template units that clash are renumbered.
        let mut taken: HashSet<String> = slots
            .iter()
            .filter(|(_, donated)| *donated)
            .map(|(u, _)| u.id.clone())
            .collect();
        let mut units = Vec::with_capacity(slots.len());
        for (mut unit, donated) in slots {
            if !donated && taken.contains(&unit.id) {
                let ids = taken.iter().map(String::as_str).collect();
                unit.id = unique_id(&ids, &unit.module_id, 1);
            }
            taken.insert(unit.id.clone());
            units.push(unit);
        }

        let dropped = project.units.len() - used.iter().filter(|u| **u).count();
        tracing::info!(
            from = project.mode.code(),
            to = mode.code(),
            units = units.len(),
            dropped,
            "layout mode switched"
        );

        let groups = scrub_groups(&project.groups, &mut units);

        Project {
            mode,
            footprint: project.footprint.adapted_to(mode),
            units: Arc::new(units),
            groups: Arc::new(groups),
            ..project.clone()
        }
    }
}

fn transplant(donor: &Unit, slot: Unit) -> Unit {
    Unit {
        id: donor.id.clone(),
        module_id: donor.module_id.clone(),
        name: donor.name.clone(),
        width: donor.width,
        height: donor.height,
        depth: donor.depth,
        materials: donor.materials.clone(),
        accessories: donor.accessories.clone(),
        hardware: donor.hardware.clone(),
        handle: donor.handle.clone(),
        door_style: donor.door_style,
        hinge_side: donor.hinge_side,
        sku: donor.sku.clone(),
        drawer_type: donor.drawer_type,
        corner_type: donor.corner_type,
        group_id: donor.group_id.clone(),
        ..slot
    }
}

/// Drop vanished ids from groups and re-derive unit group ids from the
/// surviving memberships.
fn scrub_groups(groups: &[Group], units: &mut [Unit]) -> Vec<Group> {
    let present: HashSet<String> = units.iter().map(|u| u.id.clone()).collect();
    let groups: Vec<Group> = groups
        .iter()
        .map(|g| Group {
            unit_ids: g
                .unit_ids
                .iter()
                .filter(|id| present.contains(*id))
                .cloned()
                .collect(),
            ..g.clone()
        })
        .collect();

    for unit in units.iter_mut() {
        unit.group_id = groups
            .iter()
            .find(|g| g.unit_ids.contains(&unit.id))
            .map(|g| g.id.clone());
    }
    groups
}
