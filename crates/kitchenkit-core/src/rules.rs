//! Rule sets: placement spacing, clearance thresholds and history depth.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spacing used by the layout engine (cm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutRules {
    /// Gap left after the last unit on a wall when a new unit is created
    pub placement_gap: f64,
    /// Gap between neighbours after snapping
    pub snap_gap: f64,
    /// Grid the first unit of each run snaps to
    pub snap_grid: f64,
    /// Y offset for new units on walls other than A
    pub secondary_wall_offset: f64,
    /// Horizontal offset of a duplicate beyond the original's width
    pub duplicate_gap: f64,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            placement_gap: 3.0,
            snap_gap: 2.0,
            snap_grid: 5.0,
            secondary_wall_offset: 65.0,
            duplicate_gap: 3.0,
        }
    }
}

impl LayoutRules {
    pub fn validate(&self) -> Result<()> {
        non_negative("placement_gap", self.placement_gap)?;
        non_negative("snap_gap", self.snap_gap)?;
        non_negative("duplicate_gap", self.duplicate_gap)?;
        if !(self.snap_grid.is_finite() && self.snap_grid > 0.0) {
            return Err(Error::invalid_rule("snap_grid", "must be positive"));
        }
        if !self.secondary_wall_offset.is_finite() {
            return Err(Error::invalid_rule("secondary_wall_offset", "must be finite"));
        }
        Ok(())
    }
}

/// Clearance and ergonomic thresholds (cm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClearanceRules {
    /// Hard minimum aisle width
    pub min_aisle: f64,
    /// Clearance required around an island
    pub island_clearance: f64,
    /// Clearance for drawers opposite a run
    pub drawer_clearance: f64,
    /// Recommended aisle width
    pub comfortable_aisle: f64,
    /// Nominal counter height
    pub counter_height: f64,
    pub counter_height_min: f64,
    pub counter_height_max: f64,
    /// Counter height suggested when outside the range
    pub counter_height_target: f64,
}

impl Default for ClearanceRules {
    fn default() -> Self {
        Self {
            min_aisle: 90.0,
            island_clearance: 100.0,
            drawer_clearance: 105.0,
            comfortable_aisle: 100.0,
            counter_height: 92.0,
            counter_height_min: 88.0,
            counter_height_max: 95.0,
            counter_height_target: 91.0,
        }
    }
}

impl ClearanceRules {
    pub fn counter_height_ok(&self) -> bool {
        (self.counter_height_min..=self.counter_height_max).contains(&self.counter_height)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("min_aisle", self.min_aisle),
            ("island_clearance", self.island_clearance),
            ("drawer_clearance", self.drawer_clearance),
            ("comfortable_aisle", self.comfortable_aisle),
            ("counter_height", self.counter_height),
        ] {
            non_negative(field, value)?;
        }
        if self.counter_height_min > self.counter_height_max {
            return Err(Error::invalid_rule(
                "counter_height_min",
                format!(
                    "range {}-{} is inverted",
                    self.counter_height_min, self.counter_height_max
                ),
            ));
        }
        Ok(())
    }
}

/// Undo history depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistorySettings {
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

impl HistorySettings {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid_rule("capacity", "must be at least 1"));
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_rule(field, format!("{} must be >= 0", value)))
    }
}
