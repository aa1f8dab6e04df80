//! Geometry and clearance validation.
//!
//! All checks are advisory: they report findings as plain data and never
//! block an edit.

use std::collections::HashSet;

use kitchenkit_core::data::{LayoutMode, Project, Unit, WorkZone};
use kitchenkit_core::ClearanceRules;
use serde::{Deserialize, Serialize};

/// Pairs of unit ids whose footprints overlap on the same wall.
///
/// Overlap is strict on both axes (touching edges do not collide); `y`
/// spans the unit's depth. Pairs are `(i, j)` with `i < j` in array order.
pub fn detect_collisions(units: &[Unit]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (i, a) in units.iter().enumerate() {
        for b in &units[i + 1..] {
            if a.wall != b.wall {
                continue;
            }
            let overlap_x = a.x < b.x + b.width && a.x + a.width > b.x;
            let overlap_y = a.y < b.y + b.depth && a.y + a.depth > b.y;
            if overlap_x && overlap_y {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    pairs
}

/// Clearance and collision issues, as user-facing messages.
pub fn validate_layout(project: &Project, rules: &ClearanceRules) -> Vec<String> {
    let aisle = project.footprint.aisle_min;
    let mut issues = Vec::new();

    if aisle < rules.min_aisle {
        issues.push(format!(
            "Minimum aisle clearance should be at least {}cm.",
            rules.min_aisle
        ));
    }

    let collisions = detect_collisions(&project.units);
    if !collisions.is_empty() {
        issues.push(format!("Detected {} unit collision(s).", collisions.len()));
    }

    if project.mode == LayoutMode::Island
        && project.footprint.island.is_some()
        && aisle < rules.island_clearance
    {
        issues.push(format!(
            "Island mode requires at least {}cm clearance around island.",
            rules.island_clearance
        ));
    }

    if aisle < rules.drawer_clearance && project.units.iter().any(Unit::is_drawer) {
        issues.push(format!(
            "Drawer opening clearance below {}cm opposite run guidance.",
            rules.drawer_clearance
        ));
    }

    issues
}

/// An ergonomic finding with a suggested fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErgonomicWarning {
    pub warning: String,
    pub suggestion: String,
}

impl ErgonomicWarning {
    fn new(warning: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            warning: warning.into(),
            suggestion: suggestion.into(),
        }
    }
}

pub fn ergonomic_warnings(project: &Project, rules: &ClearanceRules) -> Vec<ErgonomicWarning> {
    let mut warnings = Vec::new();

    if !rules.counter_height_ok() {
        warnings.push(ErgonomicWarning::new(
            format!(
                "Counter height outside ergonomic range {}-{}cm.",
                rules.counter_height_min, rules.counter_height_max
            ),
            format!(
                "Adjust plinth/worktop to target {}cm.",
                rules.counter_height_target
            ),
        ));
    }

    let aisle = project.footprint.aisle_min;
    if aisle < rules.comfortable_aisle {
        warnings.push(ErgonomicWarning::new(
            format!(
                "Aisle is tighter than recommended {}cm.",
                rules.comfortable_aisle
            ),
            format!("Increase aisle by {}cm.", rules.comfortable_aisle - aisle),
        ));
    }

    if !work_triangle_complete(project) {
        warnings.push(ErgonomicWarning::new(
            "Work triangle incomplete.",
            "Place fridge, sink and cooktop to complete work triangle.",
        ));
    }

    warnings
}

/// Whether the cold, wet and hot zones each have at least one appliance.
pub fn work_triangle_complete(project: &Project) -> bool {
    let zones: HashSet<WorkZone> = project
        .appliances
        .iter()
        .filter_map(|a| a.work_zone())
        .collect();
    zones.len() == 3
}

/// A unit whose run extends past the end of its wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfBounds {
    pub unit_id: String,
    /// How far the unit sticks out (cm)
    pub overhang: f64,
}

/// Units extending beyond their wall length, or placed on a wall the
/// footprint does not have.
pub fn units_out_of_bounds(project: &Project) -> Vec<OutOfBounds> {
    project
        .units
        .iter()
        .filter_map(|u| {
            let overhang = match project.footprint.wall_length(u.wall) {
                Some(length) => u.end_x() - length,
                None => u.width,
            };
            (overhang > 0.0).then(|| OutOfBounds {
                unit_id: u.id.clone(),
                overhang,
            })
        })
        .collect()
}
