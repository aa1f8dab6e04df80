//! Starter unit sets for each layout mode.

use super::catalog::ModuleLibrary;
use super::layout::{LayoutMode, WallId};
use super::style::MaterialAssignment;
use super::unit::Unit;

/// One position in a template kitchen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSlot {
    pub module_id: &'static str,
    /// Suffix of the generated unit id
    pub index: u32,
    pub wall: WallId,
    pub x: f64,
    pub y: f64,
}

const fn slot(module_id: &'static str, index: u32, wall: WallId, x: f64, y: f64) -> TemplateSlot {
    TemplateSlot {
        module_id,
        index,
        wall,
        x,
        y,
    }
}

const CORE_RUN: [TemplateSlot; 6] = [
    slot("base-60", 1, WallId::A, 0.0, 0.0),
    slot("base-draw-90", 2, WallId::A, 65.0, 0.0),
    slot("base-60", 3, WallId::A, 160.0, 0.0),
    slot("wall-80", 4, WallId::A, 0.0, 90.0),
    slot("wall-80", 5, WallId::A, 90.0, 90.0),
    slot("tall-60", 6, WallId::A, 250.0, 0.0),
];

const CORNER_RUN: [TemplateSlot; 3] = [
    slot("corner-carousel", 7, WallId::A, 320.0, 0.0),
    slot("base-60", 8, WallId::B, 0.0, 65.0),
    slot("pantry-super", 9, WallId::B, 0.0, 130.0),
];

const THIRD_WALL: [TemplateSlot; 2] = [
    slot("base-60", 10, WallId::C, 75.0, 0.0),
    slot("base-draw-90", 11, WallId::C, 165.0, 0.0),
];

const ISLAND_RUN: [TemplateSlot; 2] = [
    slot("base-draw-90", 12, WallId::Island, 120.0, 120.0),
    slot("base-60", 13, WallId::Island, 215.0, 120.0),
];

const GALLEY_RUN: [TemplateSlot; 2] = [
    slot("base-60", 8, WallId::B, 0.0, 65.0),
    slot("base-draw-90", 11, WallId::B, 65.0, 65.0),
];

/// Template slots for `mode`, in generation order.
pub fn template_slots(mode: LayoutMode) -> Vec<TemplateSlot> {
    let mut slots = CORE_RUN.to_vec();
    match mode {
        LayoutMode::SingleWall => {}
        LayoutMode::Galley => slots.extend_from_slice(&GALLEY_RUN),
        LayoutMode::L => slots.extend_from_slice(&CORNER_RUN),
        LayoutMode::U => {
            slots.extend_from_slice(&CORNER_RUN);
            slots.extend_from_slice(&THIRD_WALL);
        }
        LayoutMode::G => {
            slots.extend_from_slice(&CORNER_RUN);
            slots.extend_from_slice(&THIRD_WALL);
            slots.extend_from_slice(&ISLAND_RUN);
        }
        LayoutMode::Island => slots.extend_from_slice(&ISLAND_RUN),
        LayoutMode::Peninsula => {
            slots.extend_from_slice(&CORNER_RUN);
            slots.extend_from_slice(&ISLAND_RUN);
        }
    }
    slots
}

/// Build the template kitchen for `mode` from `library`.
///
/// Slots whose module is not in the library are skipped.
pub fn generate_template(
    mode: LayoutMode,
    library: &ModuleLibrary,
    materials: &MaterialAssignment,
) -> Vec<Unit> {
    template_slots(mode)
        .into_iter()
        .filter_map(|slot| {
            let Some(module) = library.get_module(slot.module_id) else {
                tracing::debug!(module = slot.module_id, "template module missing from library");
                return None;
            };
            let id = format!("{}-{}", module.id, slot.index);
            Some(
                Unit::from_module(id, module, slot.wall, slot.x, slot.y)
                    .with_materials(materials.clone()),
            )
        })
        .collect()
}
