//! Run lengths, areas and edge lengths for quoting.

use kitchenkit_core::data::Project;
use kitchenkit_core::units::{cm2_to_m2, cm_to_m};
use serde::{Deserialize, Serialize};

use super::worktop::{auto_generate_worktop, total_worktop_length};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallRuns {
    pub wall_a: f64,
    pub wall_b: f64,
    /// Zero when the layout has no third wall
    pub wall_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IslandOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementReport {
    pub runs: WallRuns,
    pub island_offset: Option<IslandOffset>,
    pub total_units: usize,
    /// Sum of worktop segment lengths (cm)
    pub total_worktop_length: f64,
    /// Door fronts, width x height (m², 2dp)
    pub door_area: f64,
    /// Side panels, height x depth (m², 2dp)
    pub panel_area: f64,
    /// Worktop edge banding (m, 2dp)
    pub edge_linear_meters: f64,
}

pub fn measurement_report(project: &Project) -> MeasurementReport {
    let footprint = &project.footprint;
    let worktop_length = total_worktop_length(&auto_generate_worktop(project));

    MeasurementReport {
        runs: WallRuns {
            wall_a: footprint.wall_a,
            wall_b: footprint.wall_b,
            wall_c: footprint.wall_c.unwrap_or(0.0),
        },
        island_offset: footprint.island.map(|i| IslandOffset { x: i.x, y: i.y }),
        total_units: project.units.len(),
        total_worktop_length: worktop_length,
        door_area: cm2_to_m2(project.units.iter().map(|u| u.width * u.height).sum()),
        panel_area: cm2_to_m2(project.units.iter().map(|u| u.height * u.depth).sum()),
        edge_linear_meters: cm_to_m(worktop_length),
    }
}
