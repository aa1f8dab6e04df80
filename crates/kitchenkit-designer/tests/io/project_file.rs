use kitchenkit_core::data::Accessory;
use kitchenkit_core::{Appliance, ApplianceKind, LayoutMode, Project};
use kitchenkit_designer::{LayoutEngine, ProjectFile, ProjectFileError, FILE_FORMAT_VERSION};

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("u-kitchen.json");

    let engine = LayoutEngine::default();
    let project = Project::new("Round trip", LayoutMode::U);
    let id = project.units[0].id.clone();
    let project = engine.assign_accessory(&project, &id, &Accessory::cutlery_insert());
    let project = engine.add_appliance(&project, Appliance::new("sink-1", ApplianceKind::Sink, 80.0));
    let project = engine.create_group(&project, &[id.clone()], "Sink run");

    ProjectFile::from_project(&project).save_to_file(&path).unwrap();
    let loaded = ProjectFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.version, FILE_FORMAT_VERSION);
    assert_eq!(loaded.metadata.name, "Round trip");
    assert!(loaded.metadata.modified >= loaded.metadata.created);

    let restored = loaded.into_project();
    assert_eq!(restored, project);
}

#[test]
fn test_document_shape() {
    let project = Project::new("Shape", LayoutMode::Island);
    let json = ProjectFile::from_project(&project).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], "1.0");
    assert_eq!(value["layoutType"], "island");
    assert_eq!(value["walls"].as_array().unwrap().len(), 2);
    assert_eq!(value["walls"][0]["id"], "A");
    assert_eq!(value["walls"][0]["length"], 360.0);
    assert_eq!(value["cabinets"].as_array().unwrap().len(), 8);
    assert_eq!(value["island"]["width"], 180.0);
    assert!(value.get("globalStyle").is_some());
    assert!(value.get("lighting").is_some());
    assert!(value.get("countertop").is_some());
    assert_eq!(value["aisleMin"], 100.0);
}

#[test]
fn test_island_null_in_non_island_layout() {
    let project = Project::new("Null island", LayoutMode::L);
    let json = ProjectFile::from_project(&project).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["island"].is_null());

    let restored = ProjectFile::from_json(&json).unwrap().into_project();
    assert!(restored.footprint.island.is_none());
}

#[test]
fn test_island_backfilled_for_island_layout() {
    let json = r#"{ "layoutType": "island", "walls": [{ "id": "A", "length": 420 }], "island": null }"#;
    let project = ProjectFile::from_json(json).unwrap().into_project();
    assert_eq!(project.footprint.wall_a, 420.0);
    assert_eq!(project.footprint.island.map(|i| i.width), Some(180.0));
}

#[test]
fn test_load_missing_file_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectFile::load_from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read project file"));
}

#[test]
fn test_load_invalid_file_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{ "version": "3.1", "layoutType": "L", "walls": [] }"#).unwrap();
    let err = ProjectFile::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse project file"));
    assert!(matches!(
        err.downcast_ref::<ProjectFileError>(),
        Some(ProjectFileError::UnsupportedVersion(_))
    ));
}

#[test]
fn test_unknown_walls_are_ignored() {
    let json = r#"{
        "layoutType": "L",
        "walls": [{ "id": "north", "length": 999 }, { "id": "B", "length": 280 }]
    }"#;
    let project = ProjectFile::from_json(json).unwrap().into_project();
    assert_eq!(project.footprint.wall_a, 360.0);
    assert_eq!(project.footprint.wall_b, 280.0);
}
