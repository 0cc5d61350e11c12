use freightplan_core::{ComponentId, FloorId, GridPos, Rotation, SectorId};
use freightplan_designer::{Color, Floor, GridRect, HasStableId, Tile};

fn floor() -> Floor {
    Floor::new(FloorId(7), "Cargo Deck", 2).unwrap()
}

fn tile(component: ComponentId) -> Tile {
    Tile::new(component, Rotation::ZERO)
}

#[test]
fn test_new_floor_defaults() {
    let floor = floor();
    assert_eq!(floor.id(), FloorId(7));
    assert_eq!(floor.name(), "Cargo Deck");
    assert_eq!(floor.level(), 2);
    assert!(floor.is_visible());
    assert!(!floor.is_locked());
    assert!(!floor.is_dirty());
    assert!(floor.is_empty());
}

#[test]
fn test_level_must_be_in_range() {
    assert!(Floor::new(FloorId(0), "x", 0)
        .unwrap_err()
        .is_contract_violation());
    assert!(Floor::new(FloorId(0), "x", 15).is_err());

    let mut floor = floor();
    assert!(floor.set_level(14).is_ok());
    assert!(floor.set_level(15).unwrap_err().is_contract_violation());
    assert_eq!(floor.level(), 14);
}

#[test]
fn test_cell_at_checks_bounds() {
    let floor = floor();
    assert_eq!(floor.cell_at(GridPos::new(5, 6)).unwrap().pos(), GridPos::new(5, 6));
    assert!(floor.cell_at(GridPos::new(-1, 0)).is_err());
    assert!(floor.cell_at(GridPos::new(0, 64)).is_err());
}

#[test]
fn test_placing_same_tile_twice_is_idempotent() {
    let mut once = floor();
    once.set_tile(GridPos::new(3, 3), tile(ComponentId::Stairs)).unwrap();

    let mut twice = floor();
    twice.set_tile(GridPos::new(3, 3), tile(ComponentId::Stairs)).unwrap();
    twice.set_tile(GridPos::new(3, 3), tile(ComponentId::Stairs)).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.tile_count(), 1);
}

#[test]
fn test_set_tile_replaces() {
    let mut floor = floor();
    let pos = GridPos::new(1, 2);
    floor.set_tile(pos, tile(ComponentId::RoomLarge)).unwrap();
    let previous = floor.set_tile(pos, tile(ComponentId::Junction)).unwrap();

    assert_eq!(previous, Some(tile(ComponentId::RoomLarge)));
    assert_eq!(floor.tile_at(pos).unwrap(), Some(tile(ComponentId::Junction)));
    assert_eq!(floor.tile_count(), 1);
}

#[test]
fn test_locked_floor_rejects_changes() {
    let mut floor = floor();
    floor.set_tile(GridPos::new(0, 0), tile(ComponentId::Stairs)).unwrap();
    floor.set_locked(true);

    assert!(floor.set_tile(GridPos::new(1, 1), tile(ComponentId::Stairs)).is_err());
    assert!(floor.take_tile(GridPos::new(0, 0)).is_err());
    assert!(floor.clear().is_err());
    assert_eq!(floor.tile_count(), 1);
}

#[test]
fn test_sectors() {
    let mut floor = floor();
    let engineering = floor
        .add_sector(GridRect::new(0, 0, 10, 4), "Engineering", Color::rgb(200, 40, 40))
        .unwrap();
    let cargo = floor
        .add_sector(GridRect::new(8, 2, 6, 6), "Cargo", Color::default())
        .unwrap();
    assert_eq!(engineering, SectorId(0));
    assert_eq!(cargo, SectorId(1));

    // Overlap is allowed
    let names: Vec<&str> = floor.sectors_at(GridPos::new(9, 3)).map(|s| s.name()).collect();
    assert_eq!(names, vec!["Engineering", "Cargo"]);

    floor.sector_mut(cargo).unwrap().set_name("Hold");
    assert_eq!(floor.sector(cargo).unwrap().name(), "Hold");
    assert_eq!(floor.sector(cargo).unwrap().id(), cargo);

    floor.remove_sector(engineering).unwrap();
    assert_eq!(floor.sector_count(), 1);
    assert!(floor.remove_sector(engineering).is_err());
}

#[test]
fn test_sector_needs_positive_size() {
    let mut floor = floor();
    let err = floor
        .add_sector(GridRect::new(0, 0, 0, 3), "Empty", Color::default())
        .unwrap_err();
    assert!(err.is_contract_violation());
    assert_eq!(floor.sector_count(), 0);
}

#[test]
fn test_clone_and_merge_are_unsupported() {
    let mut floor = floor();
    let other = Floor::new(FloorId(8), "Other", 3).unwrap();
    assert!(floor.clone_to_level(3).unwrap_err().is_unsupported());
    assert!(floor.merge(&other).unwrap_err().is_unsupported());
}
