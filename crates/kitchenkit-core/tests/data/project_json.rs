use kitchenkit_core::data::{
    HandleStyle, LayoutMode, Project, Rotation, Unit, UnitCategory, WallId,
};

#[test]
fn test_project_json_roundtrip_preserves_everything() {
    let project = Project::new("Roundtrip", LayoutMode::U);
    let json = serde_json::to_string_pretty(&project).unwrap();
    let back: Project = serde_json::from_str(&json).unwrap();
    assert_eq!(back, project);
}

#[test]
fn test_project_json_uses_camel_case() {
    let project = Project::new("Keys", LayoutMode::Island);
    let value = serde_json::to_value(&project).unwrap();
    assert!(value.get("materialPreset").is_some());
    assert_eq!(value["mode"], "island");
    assert!(value["footprint"].get("wallA").is_some());
    assert!(value["footprint"].get("wallC").is_none());
    assert_eq!(value["units"][0]["moduleId"], "base-60");
}

#[test]
fn test_unit_backfills_missing_fields() {
    let json = r#"{
        "id": "u1",
        "moduleId": "base-60",
        "category": "base",
        "width": 60,
        "height": 72,
        "depth": 56,
        "wall": "wall-left",
        "rotation": 90,
        "handle": { "type": "pushToOpen", "placement": "horizontal", "offset": 0 }
    }"#;
    let unit: Unit = serde_json::from_str(json).unwrap();
    assert_eq!(unit.wall, WallId::B);
    assert_eq!(unit.rotation, Rotation::Deg90);
    assert_eq!(unit.category, UnitCategory::Base);
    assert_eq!(unit.handle.style, Some(HandleStyle::PushToOpen));
    assert!(unit.materials.door.is_empty());
    assert!(unit.accessories.is_empty());
    assert!(!unit.locked);
}

#[test]
fn test_old_project_library_alias() {
    let mut value = serde_json::to_value(Project::new("Alias", LayoutMode::L)).unwrap();
    let obj = value.as_object_mut().unwrap();
    let modules = obj.remove("modules").unwrap();
    obj.insert("modulesLibrary".to_string(), modules);
    let project: Project = serde_json::from_value(value).unwrap();
    assert_eq!(project.modules.len(), 7);
}
