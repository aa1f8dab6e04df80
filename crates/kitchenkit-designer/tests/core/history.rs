use kitchenkit_core::{LayoutMode, Project, WallId};
use kitchenkit_designer::{HistoryManager, HistoryState, LayoutEngine, Snapshot};

fn snapshot(aisle: f64) -> Snapshot {
    let mut project = Project::empty("History", LayoutMode::L);
    project.footprint.aisle_min = aisle;
    Snapshot::of(&project)
}

#[test]
fn test_history_manager_creation() {
    let manager = HistoryManager::new(50);
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 0);
    assert_eq!(manager.capacity(), 50);
    assert_eq!(manager.state(), HistoryState::Empty);
}

#[test]
fn test_sixty_pushes_keep_fifty() {
    let mut manager = HistoryManager::default();
    for i in 0..60 {
        manager.push(snapshot(i as f64));
    }
    assert_eq!(manager.undo_depth(), 50);

    let mut current = snapshot(1000.0);
    let mut oldest = None;
    while let Some(restored) = manager.undo(current.clone()) {
        oldest = Some(restored.footprint.aisle_min);
        current = restored;
    }
    // entries 0..10 were evicted
    assert_eq!(oldest, Some(10.0));
    assert_eq!(manager.redo_depth(), 50);
}

#[test]
fn test_undo_redo_create_round_trip() {
    let engine = LayoutEngine::default();
    let mut manager = HistoryManager::default();
    let p0 = Project::new("Round trip", LayoutMode::L);

    manager.push(Snapshot::of(&p0));
    let p1 = engine.create_unit(&p0, "base-60", WallId::B);

    let restored = manager.undo(Snapshot::of(&p1)).unwrap().restore(&p1);
    assert_eq!(restored.units, p0.units);

    let redone = manager.redo(Snapshot::of(&restored)).unwrap().restore(&restored);
    assert_eq!(redone.units, p1.units);
}

#[test]
fn test_clear_resets_everything() {
    let mut manager = HistoryManager::default();
    manager.push(snapshot(1.0));
    manager.push(snapshot(2.0));
    let _ = manager.undo(snapshot(3.0));
    manager.begin_interaction(snapshot(4.0));
    manager.clear();
    assert_eq!(manager.state(), HistoryState::Empty);
    assert!(!manager.in_interaction());
}

#[test]
fn test_snapshot_shares_unit_storage() {
    let project = Project::new("Share", LayoutMode::U);
    let snap = Snapshot::of(&project);
    assert!(std::sync::Arc::ptr_eq(&snap.units, &project.units));
}
