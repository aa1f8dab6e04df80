//! Layout engine.
//!
//! Every operation takes the current [`Project`] and returns a new one; the
//! input is never modified. Operations are total: a request that cannot be
//! applied (unknown id, locked unit, incompatible accessory) returns an
//! unchanged copy and logs the reason at `debug` level. `explain_create`,
//! `explain_edit` and [`check_accessory`] report that reason to callers.
//!
//! This module is split into submodules:
//! - `operations`: unit placement, movement, grouping and accessories
//! - `mode_switch`: regenerating the template kitchen for a new shape
//! - `editing`: style presets, appliances and footprint

mod editing;
mod mode_switch;
mod operations;

use std::collections::HashSet;

use kitchenkit_core::data::{Accessory, Project, Unit};
use kitchenkit_core::{LayoutRules, RejectionReason};
use serde::{Deserialize, Serialize};

/// Axis used by alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Which units a style or material preset is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleScope {
    All,
    Group(String),
    Units(Vec<String>),
}

impl StyleScope {
    fn includes(&self, unit: &Unit) -> bool {
        match self {
            Self::All => true,
            Self::Group(id) => unit.group_id.as_deref() == Some(id.as_str()),
            Self::Units(ids) => ids.iter().any(|i| *i == unit.id),
        }
    }
}

/// Pure layout operations over a [`Project`].
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    rules: LayoutRules,
}

impl LayoutEngine {
    pub fn new(rules: LayoutRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &LayoutRules {
        &self.rules
    }

    /// Why `create_unit` with `module_id` would leave the project unchanged.
    pub fn explain_create(&self, project: &Project, module_id: &str) -> Result<(), RejectionReason> {
        match project.modules.get_module(module_id) {
            Some(_) => Ok(()),
            None => Err(RejectionReason::UnknownModule {
                module_id: module_id.to_string(),
            }),
        }
    }

    /// Why a position edit (move, rotate, resize) of unit `id` would leave
    /// the project unchanged.
    pub fn explain_edit(&self, project: &Project, id: &str) -> Result<(), RejectionReason> {
        editable_index(project, id, false).map(|_| ())
    }
}

/// Index of unit `id`, rejecting missing units and, unless `ignore_lock`
/// is set, locked ones.
fn editable_index(project: &Project, id: &str, ignore_lock: bool) -> Result<usize, RejectionReason> {
    let index = project
        .units
        .iter()
        .position(|u| u.id == id)
        .ok_or_else(|| RejectionReason::UnknownUnit {
            unit_id: id.to_string(),
        })?;
    if project.units[index].locked && !ignore_lock {
        return Err(RejectionReason::Locked {
            unit_id: id.to_string(),
        });
    }
    Ok(index)
}

/// Whether `accessory` can be added to `unit`.
pub fn check_accessory(unit: &Unit, accessory: &Accessory) -> Result<(), RejectionReason> {
    if !accessory.fits_category(unit.category) {
        return Err(RejectionReason::IncompatibleCategory {
            accessory: accessory.name.clone(),
            category: unit.category,
        });
    }
    if unit.width < accessory.min_width {
        return Err(RejectionReason::TooNarrow {
            accessory: accessory.name.clone(),
            min_width: accessory.min_width,
            width: unit.width,
        });
    }
    Ok(())
}

/// First `{prefix}-{n}` (n counting up from `start`) not present in `taken`.
pub(crate) fn unique_id(taken: &HashSet<&str>, prefix: &str, start: usize) -> String {
    let mut n = start;
    loop {
        let candidate = format!("{}-{}", prefix, n);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

pub(crate) fn unit_ids(project: &Project) -> HashSet<&str> {
    project.units.iter().map(|u| u.id.as_str()).collect()
}

/// Apply `f` to a copy of the unit with `id`.
///
/// Missing units, and locked units unless `ignore_lock` is set, leave the
/// project unchanged.
pub(crate) fn edit_unit(
    project: &Project,
    id: &str,
    op: &'static str,
    ignore_lock: bool,
    f: impl FnOnce(&mut Unit),
) -> Project {
    let index = match editable_index(project, id, ignore_lock) {
        Ok(index) => index,
        Err(reason) => {
            tracing::debug!(op, %reason, "skipping edit");
            return project.clone();
        }
    };
    let mut units = (*project.units).clone();
    f(&mut units[index]);
    project.with_units(units)
}
