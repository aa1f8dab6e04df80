use kitchenkit_core::data::{Accessory, MaterialAssignment, UnitCategory};
use kitchenkit_core::{LayoutMode, Project, WallId};
use kitchenkit_designer::{LayoutEngine, StyleScope};

fn walnut() -> MaterialAssignment {
    MaterialAssignment {
        door: "Walnut".to_string(),
        ..MaterialAssignment::standard()
    }
}

#[test]
fn test_customizations_survive_shape_change() {
    let engine = LayoutEngine::default();
    let project = Project::new("Switch", LayoutMode::L);
    let project = engine.set_material_preset(&project, walnut());
    let project = engine.apply_material_preset(&project, &StyleScope::All);
    let first_base = project.units[0].id.clone();
    let project = engine.assign_accessory(&project, &first_base, &Accessory::cutlery_insert());

    let switched = engine.switch_layout_mode(&project, LayoutMode::U);
    assert_eq!(switched.mode, LayoutMode::U);
    assert_eq!(switched.units.len(), 11);

    // every L unit found a slot, so their finishes carry over
    for unit in project.units.iter() {
        let moved = switched.unit(&unit.id).unwrap();
        assert_eq!(moved.materials.door, "Walnut");
        assert_eq!(moved.accessories, unit.accessories);
    }
    let ids: std::collections::HashSet<_> = switched.units.iter().map(|u| &u.id).collect();
    assert_eq!(ids.len(), switched.units.len());
}

#[test]
fn test_shrinking_shape_drops_extra_units() {
    let engine = LayoutEngine::default();
    let project = Project::new("Shrink", LayoutMode::U);
    let switched = engine.switch_layout_mode(&project, LayoutMode::SingleWall);
    assert_eq!(switched.units.len(), 6);
    assert!(switched.footprint.wall_c.is_none());
    assert!(switched.units_on_wall(WallId::C).next().is_none());
}

#[test]
fn test_island_switch_adds_island_run() {
    let engine = LayoutEngine::default();
    let project = Project::new("Island", LayoutMode::SingleWall);
    let switched = engine.switch_layout_mode(&project, LayoutMode::Island);
    let island: Vec<_> = switched.units_on_wall(WallId::Island).collect();
    assert_eq!(island.len(), 2);
    assert!(island.iter().all(|u| u.category == UnitCategory::Base));
    assert!(switched.footprint.island.is_some());
}

#[test]
fn test_switching_back_restores_template_positions() {
    let engine = LayoutEngine::default();
    let original = Project::new("Back", LayoutMode::L);
    let there = engine.switch_layout_mode(&original, LayoutMode::G);
    let back = engine.switch_layout_mode(&there, LayoutMode::L);

    let positions = |p: &Project| -> Vec<(WallId, f64, f64)> {
        p.units.iter().map(|u| (u.wall, u.x, u.y)).collect()
    };
    assert_eq!(positions(&back), positions(&original));
}
