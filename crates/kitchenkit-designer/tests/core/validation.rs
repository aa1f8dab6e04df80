use std::sync::Arc;

use kitchenkit_core::data::init_standard_library;
use kitchenkit_core::{ClearanceRules, LayoutMode, Project, Unit, WallId};
use kitchenkit_designer::{detect_collisions, validate_layout, work_triangle_complete};

fn base_unit(id: &str, wall: WallId, x: f64) -> Unit {
    let library = init_standard_library();
    Unit::from_module(id, library.get_module("base-60").unwrap(), wall, x, 0.0)
}

#[test]
fn test_l_layout_without_drawers_validates_clean() {
    let project = Project::new("Clean", LayoutMode::L);
    assert_eq!(project.footprint.wall_a, 360.0);
    assert_eq!(project.footprint.wall_b, 300.0);
    assert_eq!(project.footprint.aisle_min, 100.0);

    let units: Vec<Unit> = project.units.iter().filter(|u| !u.is_drawer()).cloned().collect();
    let project = project.with_units(units);
    assert!(validate_layout(&project, &ClearanceRules::default()).is_empty());
}

#[test]
fn test_two_overlapping_units_give_one_pair() {
    let units = vec![base_unit("unit1", WallId::A, 0.0), base_unit("unit2", WallId::A, 30.0)];
    assert_eq!(
        detect_collisions(&units),
        vec![("unit1".to_string(), "unit2".to_string())]
    );
}

#[test]
fn test_touching_units_do_not_collide() {
    let units = vec![base_unit("a", WallId::A, 0.0), base_unit("b", WallId::A, 60.0)];
    assert!(detect_collisions(&units).is_empty());
}

#[test]
fn test_other_wall_never_collides() {
    let units = vec![base_unit("a", WallId::A, 0.0), base_unit("b", WallId::B, 0.0)];
    assert!(detect_collisions(&units).is_empty());
}

#[test]
fn test_validation_messages() {
    let mut project = Project::new("Tight", LayoutMode::Island);
    project.footprint.aisle_min = 80.0;
    let mut units = project.units.to_vec();
    units.push(base_unit("overlap", WallId::A, -30.0));
    project.units = Arc::new(units);

    let issues = validate_layout(&project, &ClearanceRules::default());
    assert_eq!(
        issues,
        vec![
            "Minimum aisle clearance should be at least 90cm.".to_string(),
            "Detected 1 unit collision(s).".to_string(),
            "Island mode requires at least 100cm clearance around island.".to_string(),
            "Drawer opening clearance below 105cm opposite run guidance.".to_string(),
        ]
    );
}

#[test]
fn test_work_triangle_needs_all_zones() {
    use kitchenkit_core::{Appliance, ApplianceKind};

    let mut project = Project::new("Triangle", LayoutMode::L);
    assert!(!work_triangle_complete(&project));
    project.appliances = Arc::new(vec![
        Appliance::new("fridge", ApplianceKind::Fridge, 60.0),
        Appliance::new("sink", ApplianceKind::Sink, 80.0),
    ]);
    assert!(!work_triangle_complete(&project));
    let mut appliances = project.appliances.to_vec();
    appliances.push(Appliance::new("hob", ApplianceKind::Cooktop, 60.0));
    project.appliances = Arc::new(appliances);
    assert!(work_triangle_complete(&project));
}
