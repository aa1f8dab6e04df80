use kitchenkit_core::data::Accessory;
use kitchenkit_core::{Appliance, ApplianceKind, ClearanceRules, LayoutMode, LayoutRules, WallId};
use kitchenkit_designer::{Axis, HistoryState, LayoutEngine, PlannerState, Selection};

#[test]
fn test_editing_session() {
    let mut planner = PlannerState::default();
    planner.new_project("Session", LayoutMode::U);
    assert!(!planner.can_undo());

    assert!(planner.create_unit("base-60", WallId::C));
    let new_id = planner.selected_unit().unwrap().id.clone();
    assert!(planner.assign_accessory(&new_id, &Accessory::cutlery_insert()));
    assert!(planner.duplicate_unit(&new_id));
    let copy_id = match &planner.selection {
        Some(Selection::Unit(id)) => id.clone(),
        other => panic!("expected unit selection, got {:?}", other),
    };
    assert!(copy_id.starts_with(&format!("{}-copy", new_id)));

    assert!(planner.create_group(&[new_id.clone(), copy_id.clone()], "Pair"));
    assert!(planner.snap_units());
    assert!(!planner.snap_units());
    assert_eq!(planner.history_state(), HistoryState::HasUndo);

    assert!(planner.delete_unit(&copy_id));
    let group = &planner.project().groups[0];
    assert_eq!(group.unit_ids, vec![new_id.clone()]);

    assert!(planner.undo());
    assert!(planner.project().has_unit(&copy_id));
    assert_eq!(planner.history_state(), HistoryState::HasBoth);
}

#[test]
fn test_locked_unit_resists_every_edit() {
    let mut planner = PlannerState::default();
    let ids: Vec<String> = planner.project().units.iter().map(|u| u.id.clone()).collect();
    let locked = ids[0].clone();
    planner.toggle_lock(&locked);
    let before = planner.project().unit(&locked).unwrap().clone();

    planner.move_unit(&locked, 400.0, 400.0);
    planner.rotate_unit(&locked);
    planner.align_units(&ids, Axis::X);
    planner.snap_units();
    assert_eq!(planner.project().unit(&locked), Some(&before));

    // properties can still be edited while locked
    assert!(planner.update_unit(&locked, |u| u.name = "Sink base".to_string()));
    assert_eq!(planner.project().unit(&locked).unwrap().name, "Sink base");
}

#[test]
fn test_appliances_complete_the_checklist() {
    let mut planner = PlannerState::default();
    assert!(planner.set_aisle_min(110.0));
    assert!(planner.add_appliance(Appliance::new("fridge-1", ApplianceKind::Fridge, 60.0)));
    assert!(planner.add_appliance(Appliance::new("sink-1", ApplianceKind::Sink, 80.0)));
    assert!(planner.add_appliance(Appliance::new("hob-1", ApplianceKind::Cooktop, 60.0)));
    assert!(!planner.add_appliance(Appliance::new("sink-1", ApplianceKind::Sink, 80.0)));

    assert!(planner.checklist().iter().all(|item| item.ok));
    assert!(planner.validation().is_empty());
    assert_eq!(planner.bom().appliances.len(), 3);
}

#[test]
fn test_custom_settings() {
    let engine = LayoutEngine::new(LayoutRules {
        snap_gap: 0.0,
        ..LayoutRules::default()
    });
    let clearance = ClearanceRules {
        drawer_clearance: 90.0,
        ..ClearanceRules::default()
    };
    let mut planner = PlannerState::default().with_settings(engine, clearance, 2);

    assert!(planner.validation().is_empty());
    let id = planner.project().units[0].id.clone();
    for _ in 0..4 {
        planner.rotate_unit(&id);
    }
    assert!(planner.undo());
    assert!(planner.undo());
    assert!(!planner.undo());
}

#[test]
fn test_mode_switch_through_planner() {
    let mut planner = PlannerState::default();
    let id = planner.project().units[0].id.clone();
    planner.select_unit(&id);
    planner.switch_layout_mode(LayoutMode::Galley);

    assert_eq!(planner.project().mode, LayoutMode::Galley);
    assert!(planner.selection.is_none());
    assert_eq!(planner.history_state(), HistoryState::Empty);
    assert!(planner.project().units_on_wall(WallId::B).count() >= 2);
}
