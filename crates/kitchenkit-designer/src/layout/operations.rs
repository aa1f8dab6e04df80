//! Unit placement, movement, grouping and accessory operations.

use std::sync::Arc;

use kitchenkit_core::data::{Accessory, Group, Project, Unit, WallId};

use super::{check_accessory, edit_unit, unique_id, unit_ids, Axis, LayoutEngine};

impl LayoutEngine {
    /// Append a unit of `module_id` at the end of `wall`'s run.
    pub fn create_unit(&self, project: &Project, module_id: &str, wall: WallId) -> Project {
        let Some(module) = project.modules.get_module(module_id) else {
            tracing::debug!(module = module_id, "module not in library, skipping create");
            return project.clone();
        };

        let x = project
            .units_on_wall(wall)
            .map(|u| u.end_x() + self.rules.placement_gap)
            .reduce(f64::max)
            .unwrap_or(0.0);
        let y = if wall == WallId::A {
            0.0
        } else {
            self.rules.secondary_wall_offset
        };

        let id = unique_id(&unit_ids(project), &module.id, project.units.len() + 1);
        let unit = Unit::from_module(id, module, wall, x, y)
            .with_materials(project.material_preset.clone());

        let mut units = (*project.units).clone();
        units.push(unit);
        project.with_units(units)
    }

    pub fn move_unit(&self, project: &Project, id: &str, x: f64, y: f64) -> Project {
        edit_unit(project, id, "move", false, |unit| {
            unit.x = x;
            unit.y = y;
        })
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate_unit(&self, project: &Project, id: &str) -> Project {
        edit_unit(project, id, "rotate", false, |unit| {
            unit.rotation = unit.rotation.next();
        })
    }

    pub fn resize_unit(&self, project: &Project, id: &str, width: f64) -> Project {
        edit_unit(project, id, "resize", false, |unit| unit.width = width)
    }

    /// Apply `f` to the unit with `id`, regardless of its lock.
    pub fn update_unit(&self, project: &Project, id: &str, f: impl FnOnce(&mut Unit)) -> Project {
        edit_unit(project, id, "update", true, f)
    }

    pub fn toggle_lock(&self, project: &Project, id: &str) -> Project {
        edit_unit(project, id, "toggle_lock", true, |unit| {
            unit.locked = !unit.locked;
        })
    }

    /// Append an unlocked, ungrouped copy beside the original.
    pub fn duplicate_unit(&self, project: &Project, id: &str) -> Project {
        let Some(source) = project.unit(id) else {
            tracing::debug!(unit = id, "unit not found, skipping duplicate");
            return project.clone();
        };

        let mut copy = source.clone();
        copy.id = unique_id(&unit_ids(project), &format!("{}-copy", source.id), 1);
        copy.x = source.x + source.width + self.rules.duplicate_gap;
        copy.locked = false;
        copy.group_id = None;

        let mut units = (*project.units).clone();
        units.push(copy);
        project.with_units(units)
    }

    /// Remove a unit and scrub it from every group. Empty groups are kept.
    pub fn delete_unit(&self, project: &Project, id: &str) -> Project {
        if !project.has_unit(id) {
            tracing::debug!(unit = id, "unit not found, skipping delete");
            return project.clone();
        }

        let units: Vec<Unit> = project.units.iter().filter(|u| u.id != id).cloned().collect();
        let groups: Vec<Group> = project
            .groups
            .iter()
            .map(|g| Group {
                unit_ids: g.unit_ids.iter().filter(|u| *u != id).cloned().collect(),
                ..g.clone()
            })
            .collect();

        Project {
            units: Arc::new(units),
            groups: Arc::new(groups),
            ..project.clone()
        }
    }

    /// Align the unlocked units among `ids` to the smallest coordinate on
    /// `axis` found among all of them.
    pub fn align_units(&self, project: &Project, ids: &[String], axis: Axis) -> Project {
        let coord = |u: &Unit| match axis {
            Axis::X => u.x,
            Axis::Y => u.y,
        };
        let selected = |u: &&Unit| ids.iter().any(|id| *id == u.id);

        let Some(target) = project.units.iter().filter(selected).map(coord).reduce(f64::min) else {
            tracing::debug!("no existing units selected, skipping align");
            return project.clone();
        };

        let units = project
            .units
            .iter()
            .map(|u| {
                let mut unit = u.clone();
                if selected(&u) && !u.locked {
                    match axis {
                        Axis::X => unit.x = target,
                        Axis::Y => unit.y = target,
                    }
                }
                unit
            })
            .collect();
        project.with_units(units)
    }

    /// Close gaps along each wall run.
    ///
    /// Units are visited ordered by wall, then x, y and id. The first
    /// unlocked unit of a run snaps to the grid; each following unlocked
    /// unit sits `snap_gap` after the previous unlocked one. Locked units
    /// stay where they are and are ignored as neighbours. Array order is
    /// preserved and snapping an already snapped project changes nothing.
    pub fn snap_units(&self, project: &Project) -> Project {
        let grid = self.rules.snap_grid;
        let to_grid = |v: f64| (v / grid).round() * grid;

        let mut order: Vec<usize> = (0..project.units.len()).collect();
        order.sort_by(|&a, &b| {
            let (ua, ub) = (&project.units[a], &project.units[b]);
            ua.wall
                .cmp(&ub.wall)
                .then(ua.x.total_cmp(&ub.x))
                .then(ua.y.total_cmp(&ub.y))
                .then_with(|| ua.id.cmp(&ub.id))
        });

        let mut units = (*project.units).clone();
        let mut previous: Option<(WallId, f64)> = None;
        for index in order {
            let unit = &mut units[index];
            if unit.locked {
                continue;
            }
            unit.x = match previous {
                Some((wall, end)) if wall == unit.wall => end + self.rules.snap_gap,
                _ => {
                    unit.y = to_grid(unit.y);
                    to_grid(unit.x)
                }
            };
            previous = Some((unit.wall, unit.end_x()));
        }
        project.with_units(units)
    }

    /// Group the existing units among `ids`, moving them out of any
    /// previous group.
    pub fn create_group(&self, project: &Project, ids: &[String], name: &str) -> Project {
        let mut members: Vec<String> = Vec::new();
        for id in ids {
            if project.has_unit(id) && !members.contains(id) {
                members.push(id.clone());
            }
        }

        let taken = project.groups.iter().map(|g| g.id.as_str()).collect();
        let group_id = unique_id(&taken, "group", project.groups.len() + 1);

        let mut groups: Vec<Group> = project
            .groups
            .iter()
            .map(|g| Group {
                unit_ids: g
                    .unit_ids
                    .iter()
                    .filter(|u| !members.contains(*u))
                    .cloned()
                    .collect(),
                ..g.clone()
            })
            .collect();

        let units = project
            .units
            .iter()
            .map(|u| {
                let mut unit = u.clone();
                if members.contains(&u.id) {
                    unit.group_id = Some(group_id.clone());
                }
                unit
            })
            .collect();

        tracing::debug!(group = %group_id, members = members.len(), "group created");
        groups.push(Group {
            id: group_id,
            name: name.to_string(),
            unit_ids: members,
        });

        Project {
            units: Arc::new(units),
            groups: Arc::new(groups),
            ..project.clone()
        }
    }

    /// Add `accessory` to a unit if it fits; otherwise unchanged.
    pub fn assign_accessory(&self, project: &Project, unit_id: &str, accessory: &Accessory) -> Project {
        let Some(unit) = project.unit(unit_id) else {
            tracing::debug!(unit = unit_id, "unit not found, skipping accessory");
            return project.clone();
        };
        if let Err(reason) = check_accessory(unit, accessory) {
            tracing::debug!(unit = unit_id, %reason, "accessory rejected");
            return project.clone();
        }
        edit_unit(project, unit_id, "assign_accessory", true, |unit| {
            unit.accessories.push(accessory.clone());
        })
    }
}
