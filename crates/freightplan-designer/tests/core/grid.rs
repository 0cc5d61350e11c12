use freightplan_core::constants::{CELL_SIZE, GRID_SIZE};
use freightplan_core::{GridError, GridPos, ScenePoint};
use freightplan_designer::grid::*;
use proptest::prelude::*;

fn valid_pos() -> impl Strategy<Value = GridPos> {
    (0..GRID_SIZE, 0..GRID_SIZE).prop_map(|(x, y)| GridPos::new(x, y))
}

proptest! {
    #[test]
    fn scene_round_trip(pos in valid_pos()) {
        prop_assert_eq!(scene_to_grid(grid_to_scene(pos)), pos);
    }

    #[test]
    fn index_round_trip(pos in valid_pos()) {
        let index = grid_to_index(pos).unwrap();
        prop_assert_eq!(index_to_grid(index), pos);
    }

    #[test]
    fn any_point_inside_a_cell_maps_to_it(
        pos in valid_pos(),
        dx in 0.0..(CELL_SIZE as f64),
        dy in 0.0..(CELL_SIZE as f64),
    ) {
        let corner = grid_to_scene(pos);
        let point = ScenePoint::new(corner.x + dx, corner.y + dy);
        prop_assert_eq!(scene_to_grid(point), pos);
    }
}

#[test]
fn test_boundary_positions() {
    assert!(is_valid_grid_pos(GridPos::new(0, 0)));
    assert!(is_valid_grid_pos(GridPos::new(GRID_SIZE - 1, GRID_SIZE - 1)));

    assert!(!is_valid_grid_pos(GridPos::new(GRID_SIZE, 0)));
    assert!(!is_valid_grid_pos(GridPos::new(0, GRID_SIZE)));
    assert!(!is_valid_grid_pos(GridPos::new(-1, 0)));
    assert!(!is_valid_grid_pos(GridPos::new(0, -1)));
}

#[test]
fn test_scene_positions() {
    assert!(is_valid_scene_pos(ScenePoint::new(0.0, 0.0)));
    assert!(!is_valid_scene_pos(ScenePoint::new(-0.1, 5.0)));
    assert!(!is_valid_scene_pos(ScenePoint::new(grid_extent(), 5.0)));
}

#[test]
fn test_check_grid_pos_reports_dimension() {
    let err = check_grid_pos(GridPos::new(-3, 70)).unwrap_err();
    assert_eq!(
        err,
        GridError::BoundaryViolation {
            x: -3,
            y: 70,
            dimension: GRID_SIZE
        }
    );
}

#[test]
fn test_grid_extent() {
    assert_eq!(grid_extent(), f64::from(CELL_SIZE * GRID_SIZE));
    assert_eq!(cell_count(), (GRID_SIZE * GRID_SIZE) as usize);
}
