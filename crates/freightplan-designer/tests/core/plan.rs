use freightplan_core::constants::MAX_FLOORS;
use freightplan_core::{Error, FloorId, PlanError};
use freightplan_designer::{HasStableId, Plan};

#[test]
fn test_new_plan_has_one_floor_at_level_one() {
    let plan = Plan::new("Hauler.fpl");
    assert_eq!(plan.floor_count(), 1);
    assert_eq!(plan.floor_at(0).unwrap().level(), 1);
    assert_eq!(plan.name(), "Hauler");
}

#[test]
fn test_floor_capacity() {
    let mut plan = Plan::new("p");
    for level in 2..=14 {
        plan.add_floor(level, None).unwrap();
    }
    assert_eq!(plan.floor_count(), MAX_FLOORS);

    let err = plan.add_floor(14, None).unwrap_err();
    assert!(err.is_capacity_exceeded());
    assert_eq!(plan.floor_count(), MAX_FLOORS);
}

#[test]
fn test_cannot_remove_last_floor() {
    let mut plan = Plan::new("p");
    let err = plan.remove_floor(0).unwrap_err();
    assert!(err.is_invariant_violation());
    assert_eq!(plan.floor_count(), 1);
}

#[test]
fn test_add_floor_defaults_and_validation() {
    let mut plan = Plan::new("p");
    let id = plan.add_floor(3, None).unwrap();
    let floor = plan.floor_by_id(id).unwrap();
    assert_eq!(floor.name(), "Floor 3");
    assert!(floor.is_visible());
    assert!(!floor.is_locked());

    let named = plan.add_floor(4, Some("Bridge")).unwrap();
    assert_eq!(plan.floor_by_id(named).unwrap().name(), "Bridge");

    assert!(plan.add_floor(0, None).unwrap_err().is_contract_violation());
    assert_eq!(plan.floor_count(), 3);
    assert!(plan.modified());
}

#[test]
fn test_floor_ids_are_never_reused() {
    let mut plan = Plan::new("p");
    let first = plan.floor_at(0).unwrap().id();
    let second = plan.add_floor(2, None).unwrap();
    plan.remove_floor(1).unwrap();
    let third = plan.add_floor(2, None).unwrap();

    assert_eq!(first, FloorId(0));
    assert_eq!(second, FloorId(1));
    assert_eq!(third, FloorId(2));
}

#[test]
fn test_index_errors() {
    let mut plan = Plan::new("p");
    assert!(matches!(
        plan.floor_at(1),
        Err(Error::Plan(PlanError::FloorIndexOutOfRange { index: 1, len: 1 }))
    ));
    plan.add_floor(2, None).unwrap();
    assert!(plan.remove_floor(5).is_err());
    assert!(plan.move_floor(0, 2).is_err());
    assert_eq!(plan.floor_count(), 2);
}
