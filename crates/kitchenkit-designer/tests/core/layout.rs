use kitchenkit_core::data::{Accessory, UnitCategory};
use kitchenkit_core::{LayoutMode, LayoutRules, Project, RejectionReason, Rotation, WallId};
use kitchenkit_designer::{check_accessory, Axis, LayoutEngine};

fn wall_unit_project() -> (Project, String) {
    let engine = LayoutEngine::default();
    let project = engine.create_unit(&Project::empty("Accessory", LayoutMode::L), "wall-80", WallId::A);
    let id = project.units[0].id.clone();
    (project, id)
}

#[test]
fn test_incompatible_accessory_leaves_project_unchanged() {
    let engine = LayoutEngine::default();
    let (project, id) = wall_unit_project();
    let unit = project.unit(&id).unwrap();
    assert_eq!(unit.category, UnitCategory::Wall);
    assert_eq!(unit.width, 80.0);

    let accessory = Accessory::cutlery_insert();
    assert_eq!(accessory.compatible_categories, vec![UnitCategory::Base]);
    assert_eq!(accessory.min_width, 60.0);

    let result = engine.assign_accessory(&project, &id, &accessory);
    assert_eq!(result, project);
    assert!(result.unit(&id).unwrap().accessories.is_empty());
    assert!(matches!(
        check_accessory(unit, &accessory),
        Err(RejectionReason::IncompatibleCategory { category: UnitCategory::Wall, .. })
    ));
}

#[test]
fn test_too_narrow_accessory_reason() {
    let engine = LayoutEngine::default();
    let project = engine.create_unit(&Project::empty("Narrow", LayoutMode::L), "base-60", WallId::A);
    let narrow = engine.resize_unit(&project, &project.units[0].id, 40.0);
    let unit = &narrow.units[0];
    assert_eq!(
        check_accessory(unit, &Accessory::cutlery_insert()),
        Err(RejectionReason::TooNarrow {
            accessory: "Cutlery insert".to_string(),
            min_width: 60.0,
            width: 40.0,
        })
    );
    assert!(check_accessory(unit, &Accessory::waste_sorter()).is_err());
    assert!(check_accessory(unit, &Accessory::spice_pull_out()).is_ok());
}

#[test]
fn test_explain_create() {
    let engine = LayoutEngine::default();
    let project = Project::new("Explain", LayoutMode::L);
    assert!(engine.explain_create(&project, "base-60").is_ok());
    assert_eq!(
        engine.explain_create(&project, "hob-120"),
        Err(RejectionReason::UnknownModule {
            module_id: "hob-120".to_string()
        })
    );
}

#[test]
fn test_custom_rules_change_spacing() {
    let engine = LayoutEngine::new(LayoutRules {
        placement_gap: 10.0,
        secondary_wall_offset: 80.0,
        ..LayoutRules::default()
    });
    let project = Project::empty("Rules", LayoutMode::L);
    let project = engine.create_unit(&project, "base-60", WallId::B);
    let project = engine.create_unit(&project, "base-60", WallId::B);
    let xs: Vec<_> = project.units.iter().map(|u| (u.x, u.y)).collect();
    assert_eq!(xs, vec![(0.0, 80.0), (70.0, 80.0)]);
}

#[test]
fn test_rotate_cycles_quarter_turns() {
    let engine = LayoutEngine::default();
    let (mut project, id) = wall_unit_project();
    let start = project.unit(&id).unwrap().rotation;
    for _ in 0..4 {
        project = engine.rotate_unit(&project, &id);
    }
    assert_eq!(project.unit(&id).unwrap().rotation, start);
    let once = engine.rotate_unit(&project, &id);
    assert_ne!(once.unit(&id).unwrap().rotation, start);
    assert_eq!(Rotation::Deg0.next(), Rotation::Deg90);
}

#[test]
fn test_align_skips_locked_members() {
    let engine = LayoutEngine::default();
    let project = Project::new("Align", LayoutMode::SingleWall);
    let ids: Vec<String> = project.units.iter().take(3).map(|u| u.id.clone()).collect();

    let project = engine.move_unit(&project, &ids[0], 0.0, 12.0);
    let project = engine.toggle_lock(&project, &ids[1]);
    let aligned = engine.align_units(&project, &ids, Axis::Y);

    let locked_y = project.unit(&ids[1]).unwrap().y;
    let target = ids
        .iter()
        .map(|id| project.unit(id).unwrap().y)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(aligned.unit(&ids[0]).unwrap().y, target);
    assert_eq!(aligned.unit(&ids[2]).unwrap().y, target);
    assert_eq!(aligned.unit(&ids[1]).unwrap().y, locked_y);
}

#[test]
fn test_operations_do_not_mutate_input() {
    let engine = LayoutEngine::default();
    let project = Project::new("Pure", LayoutMode::U);
    let copy = project.clone();
    let id = project.units[0].id.clone();

    let _ = engine.move_unit(&project, &id, 300.0, 300.0);
    let _ = engine.delete_unit(&project, &id);
    let _ = engine.snap_units(&project);
    let _ = engine.switch_layout_mode(&project, LayoutMode::Island);
    assert_eq!(project, copy);
}
