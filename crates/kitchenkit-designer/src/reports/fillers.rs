//! Filler panels for the space left at the end of each run.

use kitchenkit_core::data::{Project, WallId};
use serde::{Deserialize, Serialize};

/// Spacing counted after every unit when measuring a run (cm).
pub const RUN_JOINT_GAP: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filler {
    pub wall: WallId,
    pub width: f64,
}

/// Remaining width on every wall run the footprint has.
///
/// Each unit uses its width plus [`RUN_JOINT_GAP`]; the remainder is rounded
/// and clipped at zero, and runs with nothing left are omitted.
pub fn auto_fill_fillers(project: &Project) -> Vec<Filler> {
    WallId::ALL
        .iter()
        .filter_map(|&wall| {
            let length = project.footprint.wall_length(wall)?;
            if length <= 0.0 {
                return None;
            }
            let used: f64 = project
                .units_on_wall(wall)
                .map(|u| u.width + RUN_JOINT_GAP)
                .sum();
            let width = (length - used).round().max(0.0);
            (width > 0.0).then_some(Filler { wall, width })
        })
        .collect()
}
