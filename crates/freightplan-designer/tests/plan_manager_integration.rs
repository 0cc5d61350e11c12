//! Integration tests for the plan manager

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use freightplan_core::{AppEvent, ComponentId, EventBus, EventFilter, GridPos, PlanEvent};
use freightplan_designer::{ComponentCatalog, PlanManager};
use freightplan_settings::EditorSettings;

type Events = Arc<Mutex<Vec<PlanEvent>>>;

fn manager_with_events() -> (PlanManager, Events) {
    let bus = Arc::new(EventBus::new());
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    bus.subscribe(
        EventFilter::Categories(vec![freightplan_core::EventCategory::Plan]),
        move |event| {
            if let AppEvent::Plan(event) = event {
                sink.lock().unwrap().push(event);
            }
        },
    );
    let manager = PlanManager::new(
        Arc::new(ComponentCatalog::builtin()),
        bus,
        EditorSettings::default(),
    );
    (manager, events)
}

fn take(events: &Events) -> Vec<PlanEvent> {
    std::mem::take(&mut *events.lock().unwrap())
}

#[test]
fn test_new_plans_are_numbered() {
    let (mut manager, events) = manager_with_events();
    let first = manager.new_plan();
    let second = manager.new_plan();

    let titles: Vec<String> = manager.tabs().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["New Plan 1", "New Plan 2"]);
    assert_eq!(manager.active_plan(), Some(second));
    assert_eq!(manager.plan_ids(), vec![first, second]);

    let events = take(&events);
    assert_eq!(
        events[0],
        PlanEvent::Created {
            plan: first,
            name: "New Plan 1".to_string()
        }
    );
    assert_eq!(events[1], PlanEvent::Activated { plan: first });
}

#[test]
fn test_new_plan_starts_with_one_floor() {
    let (mut manager, _events) = manager_with_events();
    manager.new_plan();
    let editor = manager.active_editor().unwrap();
    assert_eq!(editor.plan().floor_count(), 1);
    assert_eq!(editor.current_floor().level(), 1);
    assert!(!editor.plan().modified());
}

#[test]
fn test_tab_tooltip_is_absolute_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Hauler.fpl");
    let (mut manager, events) = manager_with_events();

    let id = manager.open_plan(&path).unwrap();
    let tab = &manager.tabs()[0];
    assert_eq!(tab.plan, id);
    assert_eq!(tab.title, "Hauler");
    assert_eq!(PathBuf::from(&tab.tooltip), path);
    assert!(matches!(take(&events)[0], PlanEvent::Opened { .. }));
}

#[test]
fn test_open_plan_rejects_empty_path() {
    let (mut manager, _events) = manager_with_events();
    let err = manager.open_plan("").unwrap_err();
    assert!(err.is_contract_violation());
    assert!(manager.is_empty());
}

#[test]
fn test_save_unmodified_plan_is_noop() {
    let (mut manager, events) = manager_with_events();
    let id = manager.new_plan();
    take(&events);

    assert!(!manager.save_plan(id).unwrap());
    assert!(take(&events).is_empty());
}

#[test]
fn test_save_modified_plan_is_unsupported() {
    let (mut manager, events) = manager_with_events();
    let id = manager.new_plan();
    manager
        .editor_mut(id)
        .unwrap()
        .place_tile(ComponentId::Stairs, GridPos::new(1, 1))
        .unwrap();
    take(&events);

    let err = manager.save_plan(id).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(take(&events), vec![PlanEvent::Saving { plan: id }]);
    assert!(manager.tabs()[0].modified);
}

#[test]
fn test_failed_save_as_keeps_binding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Renamed.fpl");
    let (mut manager, events) = manager_with_events();
    let id = manager.new_plan();
    let before = manager.tabs();
    take(&events);

    assert!(manager.save_plan_as(id, &path).unwrap_err().is_unsupported());
    assert_eq!(take(&events), vec![PlanEvent::Saving { plan: id }]);
    assert_eq!(manager.tabs(), before);
    let editor = manager.editor(id).unwrap();
    assert_eq!(editor.plan().name(), "New Plan 1");
    assert_eq!(
        editor.plan().document().file_path(),
        std::path::Path::new("New Plan 1")
    );
    assert!(!editor.plan().modified());
}

#[test]
fn test_save_as_rejects_empty_path() {
    let (mut manager, _events) = manager_with_events();
    let id = manager.new_plan();
    assert!(manager.save_plan_as(id, "").unwrap_err().is_contract_violation());
}

#[test]
fn test_close_plan_activates_neighbour() {
    let (mut manager, events) = manager_with_events();
    let first = manager.new_plan();
    let second = manager.new_plan();
    let third = manager.new_plan();
    manager.set_active(second).unwrap();
    take(&events);

    let plan = manager.close_plan(second).unwrap();
    assert_eq!(plan.name(), "New Plan 2");
    assert_eq!(manager.active_plan(), Some(third));
    assert_eq!(
        take(&events),
        vec![
            PlanEvent::Closing { plan: second },
            PlanEvent::Activated { plan: third },
        ]
    );

    manager.close_plan(third).unwrap();
    assert_eq!(manager.active_plan(), Some(first));
    manager.close_plan(first).unwrap();
    assert_eq!(manager.active_plan(), None);
    assert!(manager.active_editor().is_none());
}

#[test]
fn test_unknown_plan() {
    let (mut manager, _events) = manager_with_events();
    let id = manager.new_plan();
    manager.close_plan(id).unwrap();

    assert!(manager.close_plan(id).is_err());
    assert!(manager.save_plan(id).is_err());
    assert!(manager.set_active(id).is_err());
    assert!(manager.editor(id).is_none());
}

#[test]
fn test_editors_are_independent() {
    let (mut manager, _events) = manager_with_events();
    let first = manager.new_plan();
    let second = manager.new_plan();

    manager
        .active_editor_mut()
        .unwrap()
        .place_tile(ComponentId::Junction, GridPos::new(3, 3))
        .unwrap();

    assert_eq!(manager.editor(second).unwrap().current_floor().tile_count(), 1);
    assert!(manager.editor(first).unwrap().current_floor().is_empty());
}
