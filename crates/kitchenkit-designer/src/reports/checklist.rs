//! Ready-to-build checklist.

use kitchenkit_core::data::{CatalogProvider, Project};
use kitchenkit_core::ClearanceRules;
use serde::{Deserialize, Serialize};

use super::worktop::{auto_generate_worktop, total_worktop_length};
use crate::validation::{detect_collisions, validate_layout};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub check: String,
    pub ok: bool,
}

fn item(check: &str, ok: bool) -> ChecklistItem {
    ChecklistItem {
        check: check.to_string(),
        ok,
    }
}

/// The eight build-readiness checks, always in the same order.
pub fn ready_to_build_checklist(project: &Project, rules: &ClearanceRules) -> Vec<ChecklistItem> {
    let units = &project.units;

    let corner_assigned = if project.mode.corner_joints().is_empty() {
        true
    } else {
        units.iter().any(|u| {
            u.corner_type.is_some()
                || project
                    .modules
                    .lookup_module(&u.module_id)
                    .is_some_and(|m| m.corner_type.is_some())
        })
    };

    vec![
        item("No unit collisions", detect_collisions(units).is_empty()),
        item(
            "Clearance rules validated",
            validate_layout(project, rules).is_empty(),
        ),
        item(
            "All units have hardware",
            units.iter().all(|u| !u.hardware.brand.is_empty()),
        ),
        item(
            "All units have handles or push-to-open",
            units.iter().all(|u| u.handle.style.is_some()),
        ),
        item(
            "Worktop generated",
            total_worktop_length(&auto_generate_worktop(project)) > 0.0,
        ),
        item("Corner solution assigned", corner_assigned),
        item(
            "Material assigned",
            units.iter().all(|u| !u.materials.door.is_empty()),
        ),
        item("Appliances defined", !project.appliances.is_empty()),
    ]
}
