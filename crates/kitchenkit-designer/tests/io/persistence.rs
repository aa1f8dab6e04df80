use kitchenkit_core::{LayoutMode, Project, WallId};
use kitchenkit_designer::{FileProjectStore, MemoryProjectStore, PlannerState, ProjectStore};

#[test]
fn test_file_store_round_trip_through_planner() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileProjectStore::new(dir.path().join("autosave").join("project.json"));

    let mut planner = PlannerState::new(Project::new("Autosave", LayoutMode::G));
    planner.create_unit("wall-80", WallId::C);
    planner.save_to(&mut store).unwrap();
    assert!(!planner.is_modified);
    assert!(store.path().exists());

    let mut restored = PlannerState::default();
    assert!(restored.load_from(&store).unwrap());
    assert_eq!(restored.project(), planner.project());
    assert!(!restored.can_undo());
}

#[test]
fn test_empty_store_leaves_planner_alone() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileProjectStore::new(dir.path().join("never-saved.json"));
    let mut planner = PlannerState::default();
    let before = planner.project().clone();
    assert!(!planner.load_from(&store).unwrap());
    assert_eq!(planner.project(), &before);
}

#[test]
fn test_corrupt_store_leaves_planner_alone() {
    let mut store = MemoryProjectStore::new();
    store.save("{ not json").unwrap();

    let mut planner = PlannerState::default();
    let id = planner.project().units[0].id.clone();
    planner.toggle_lock(&id);
    let before = planner.project().clone();

    assert!(planner.load_from(&store).is_err());
    assert_eq!(planner.project(), &before);
    assert!(planner.can_undo());
}

#[test]
fn test_export_import() {
    let source = PlannerState::new(Project::new("Export", LayoutMode::Peninsula));
    let json = source.export_json().unwrap();

    let mut target = PlannerState::default();
    target.import_json(&json).unwrap();
    assert_eq!(target.project(), source.project());
    assert!(target.is_modified);
}
