use freightplan_core::ComponentId;
use freightplan_designer::ComponentCatalog;

#[test]
fn test_builtin_catalog_has_every_component() {
    let catalog = ComponentCatalog::builtin();
    assert_eq!(catalog.len(), ComponentId::ALL.len());
    for id in ComponentId::ALL {
        assert_eq!(catalog.by_id(id).id(), id);
    }
}

#[test]
fn test_builtin_names() {
    let catalog = ComponentCatalog::builtin();
    assert_eq!(catalog.by_id(ComponentId::RoomFleet).name(), "Fleet Command Room");
    assert_eq!(catalog.by_id(ComponentId::Junction).name(), "T-Junction");
    assert_eq!(
        catalog.by_name("Cross Junction").unwrap().id(),
        ComponentId::JunctionCross
    );
}

#[test]
fn test_unknown_name() {
    let catalog = ComponentCatalog::builtin();
    let err = catalog.by_name("Reactor").unwrap_err();
    assert_eq!(err.field, "name");
}

#[test]
fn test_components_in_code_order() {
    let catalog = ComponentCatalog::builtin();
    let codes: Vec<u8> = catalog.components().iter().map(|c| c.id().code()).collect();
    assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_custom_catalog_rejects_duplicates() {
    let mut entries: Vec<(ComponentId, &str)> = ComponentId::ALL
        .iter()
        .map(|id| (*id, id.as_str()))
        .collect();
    assert!(ComponentCatalog::from_entries(entries.clone()).is_ok());

    entries[1].1 = "RoomLarge";
    let err = ComponentCatalog::from_entries(entries.clone()).unwrap_err();
    assert_eq!(err.field, "name");

    entries[1] = (ComponentId::RoomLarge, "Another Room");
    let err = ComponentCatalog::from_entries(entries).unwrap_err();
    assert_eq!(err.field, "id");
}
