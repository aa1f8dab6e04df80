//! Bill of materials.

use std::collections::BTreeMap;
use std::fmt::Write;

use kitchenkit_core::data::{ApplianceKind, CatalogProvider, Project, Unit};
use kitchenkit_core::units::{round_to, CM2_PER_M2};
use serde::{Deserialize, Serialize};

use super::fillers::{auto_fill_fillers, Filler};
use super::worktop::{auto_generate_worktop, total_worktop_length, WorktopSegment};

/// Units sharing a SKU, with the dimensions of the first one seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub sku: String,
    pub name: String,
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareTotals {
    pub hinges: u32,
    pub runners: u32,
    pub lifts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceLine {
    pub model: String,
    #[serde(rename = "type")]
    pub kind: ApplianceKind,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomTotals {
    pub total_units: usize,
    pub total_worktop_length: f64,
    /// m², 2dp
    pub total_panel_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    pub units: Vec<BomLine>,
    pub fillers: Vec<Filler>,
    pub worktops: Vec<WorktopSegment>,
    pub accessories: BTreeMap<String, usize>,
    pub hardware: HardwareTotals,
    pub handles: BTreeMap<String, usize>,
    pub materials: BTreeMap<String, usize>,
    pub appliances: Vec<ApplianceLine>,
    pub totals: BomTotals,
}

/// Purchasing key for a unit: its SKU, the module's SKU, or the module id.
fn sku_of(project: &Project, unit: &Unit) -> String {
    unit.sku
        .clone()
        .or_else(|| {
            project
                .modules
                .lookup_module(&unit.module_id)
                .and_then(|m| m.sku.clone())
        })
        .unwrap_or_else(|| unit.module_id.clone())
}

pub fn generate_bom(project: &Project) -> Bom {
    let mut lines: Vec<BomLine> = Vec::new();
    let mut accessories = BTreeMap::new();
    let mut hardware = HardwareTotals::default();
    let mut handles = BTreeMap::new();
    let mut materials = BTreeMap::new();

    for unit in project.units.iter() {
        let sku = sku_of(project, unit);
        match lines.iter_mut().find(|l| l.sku == sku) {
            Some(line) => line.count += 1,
            None => lines.push(BomLine {
                sku,
                name: unit.name.clone(),
                count: 1,
                width: unit.width,
                height: unit.height,
                depth: unit.depth,
            }),
        }

        for accessory in &unit.accessories {
            *accessories.entry(accessory.name.clone()).or_insert(0) += 1;
        }

        hardware.hinges += unit.hardware.hinges;
        hardware.runners += unit.hardware.runners;
        hardware.lifts += unit.hardware.lifts;

        let handle = unit.handle.style.map_or("none", |s| s.as_str());
        *handles.entry(handle.to_string()).or_insert(0) += 1;
        *materials.entry(unit.materials.door.clone()).or_insert(0) += 1;
    }

    let worktops = auto_generate_worktop(project);
    let panel_area: f64 = project.units.iter().map(|u| u.height * u.depth).sum();

    Bom {
        units: lines,
        fillers: auto_fill_fillers(project),
        totals: BomTotals {
            total_units: project.units.len(),
            total_worktop_length: total_worktop_length(&worktops),
            total_panel_area: round_to(panel_area / CM2_PER_M2, 2),
        },
        worktops,
        accessories,
        hardware,
        handles,
        materials,
        appliances: project
            .appliances
            .iter()
            .map(|a| ApplianceLine {
                model: a.model.clone(),
                kind: a.kind,
                count: 1,
            })
            .collect(),
    }
}

impl Bom {
    /// Unit lines as CSV, one row per SKU.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("sku,name,count,width,height,depth\n");
        for line in &self.units {
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                csv_field(&line.sku),
                csv_field(&line.name),
                line.count,
                line.width,
                line.height,
                line.depth
            );
        }
        out
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
