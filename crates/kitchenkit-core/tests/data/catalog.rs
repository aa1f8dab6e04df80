use kitchenkit_core::data::{
    init_standard_library, BrandStandard, CatalogProvider, CornerType, ModuleDefinition,
    ModuleLibrary, UnitCategory,
};

#[test]
fn test_standard_library_contents() {
    let library = init_standard_library();
    assert_eq!(library.len(), 7);

    let ids: Vec<_> = library.modules().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "base-60",
            "base-draw-90",
            "wall-80",
            "tall-60",
            "pantry-super",
            "corner-carousel",
            "appliance-tower"
        ]
    );

    let carousel = library.lookup_module("corner-carousel").unwrap();
    assert_eq!(carousel.corner_type, Some(CornerType::Carousel));
    assert_eq!((carousel.min_width, carousel.max_width), (90.0, 110.0));

    let tower = library.get_module("appliance-tower").unwrap();
    assert_eq!(tower.category, UnitCategory::ApplianceHousing);
    assert!(tower.super_unit.as_ref().unwrap().appliance_tower);
}

#[test]
fn test_modules_by_category() {
    let library = init_standard_library();
    let base: Vec<_> = library
        .modules_by_category(UnitCategory::Base)
        .into_iter()
        .map(|m| m.id.clone())
        .collect();
    assert_eq!(base, vec!["base-60", "base-draw-90", "corner-carousel"]);
    assert!(library.modules_by_category(UnitCategory::Pantry).len() == 1);
}

#[test]
fn test_custom_provider_lookup() {
    let mut library = ModuleLibrary::new();
    assert!(library.is_empty());
    library.add_module(
        ModuleDefinition::new("base-45", "Base 45", UnitCategory::Base, 45.0, 72.0, 56.0)
            .with_width_range(40.0, 50.0),
    );

    fn width_of(provider: &dyn CatalogProvider, id: &str) -> Option<f64> {
        provider.lookup_module(id).map(|m| m.width)
    }
    assert_eq!(width_of(&library, "base-45"), Some(45.0));
    assert_eq!(width_of(&library, "missing"), None);
    assert!(library.get_module("base-45").unwrap().accepts_width(48.0));
}

#[test]
fn test_brand_standard() {
    let standard = BrandStandard::default();
    assert_eq!(standard.name, "EU-600");
    assert!(standard.allows_base_width(45.0));
    assert!(!standard.allows_base_width(55.0));
    assert_eq!(standard.wall_heights, vec![70.0, 90.0, 100.0]);
}

#[test]
fn test_default_hardware_by_category() {
    let pantry = UnitCategory::Pantry.default_hardware();
    assert_eq!((pantry.hinges, pantry.runners, pantry.lifts), (4, 2, 0));
    assert_eq!(pantry.series, "Legrabox");

    let wall = UnitCategory::Wall.default_hardware();
    assert_eq!(wall.lifts, 1);
    assert_eq!(wall.series, "Aventos");

    for category in UnitCategory::all() {
        let hw = category.default_hardware();
        assert_eq!(hw.brand, "Blum");
        assert!(hw.soft_close);
    }
}
