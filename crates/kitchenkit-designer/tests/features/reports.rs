use kitchenkit_core::{LayoutMode, Project, WallId};
use kitchenkit_designer::reports::{total_worktop_length, JointType, WorktopSpan};
use kitchenkit_designer::{
    auto_fill_fillers, auto_generate_worktop, generate_bom, measurement_report, LayoutEngine,
};

#[test]
fn test_worktop_totals_match_measurements() {
    for &mode in LayoutMode::all() {
        let project = Project::new("Worktop", mode);
        let segments = auto_generate_worktop(&project);
        let report = measurement_report(&project);
        assert_eq!(report.total_worktop_length, total_worktop_length(&segments));

        let corners = segments
            .iter()
            .filter(|s| s.joint_type == JointType::Corner)
            .count();
        assert_eq!(corners, mode.corner_joints().len(), "mode {}", mode);
    }
}

#[test]
fn test_l_worktop_segments() {
    let project = Project::new("Worktop", LayoutMode::L);
    let segments = auto_generate_worktop(&project);
    let walls: Vec<_> = segments.iter().map(|s| s.wall).collect();
    assert_eq!(
        walls,
        vec![
            WorktopSpan::Wall(WallId::A),
            WorktopSpan::Wall(WallId::B),
            WorktopSpan::Corner(kitchenkit_core::CornerJoint::AtoB),
        ]
    );
}

#[test]
fn test_fillers_shrink_as_units_are_added() {
    let engine = LayoutEngine::default();
    let project = Project::new("Fillers", LayoutMode::L);
    let before = auto_fill_fillers(&project);
    let b_before = before.iter().find(|f| f.wall == WallId::B).unwrap().width;

    let project = engine.create_unit(&project, "base-60", WallId::B);
    let after = auto_fill_fillers(&project);
    let b_after = after.iter().find(|f| f.wall == WallId::B).unwrap().width;
    assert_eq!(b_before - b_after, 62.0);
}

#[test]
fn test_bom_tracks_edits() {
    let engine = LayoutEngine::default();
    let project = Project::new("BOM", LayoutMode::SingleWall);
    let id = project.units[0].id.clone();

    let bom = generate_bom(&project);
    let b60 = bom.units.iter().find(|l| l.sku == "B60").unwrap().count;

    let project = engine.duplicate_unit(&project, &id);
    let bom = generate_bom(&project);
    assert_eq!(bom.units.iter().find(|l| l.sku == "B60").unwrap().count, b60 + 1);

    let project = engine.delete_unit(&project, &id);
    let bom = generate_bom(&project);
    assert_eq!(bom.units.iter().find(|l| l.sku == "B60").unwrap().count, b60);
    assert_eq!(bom.totals.total_units, project.units.len());
}

#[test]
fn test_bom_serializes_for_export() {
    let project = Project::new("Export", LayoutMode::U);
    let bom = generate_bom(&project);
    let value = serde_json::to_value(&bom).unwrap();
    assert_eq!(value["totals"]["totalUnits"], 11);
    assert!(value["worktops"][0]["jointType"] == "straight");
    assert_eq!(value["worktops"][0]["wall"], "A");

    let csv = bom.to_csv();
    assert_eq!(csv.lines().count(), bom.units.len() + 1);
}
