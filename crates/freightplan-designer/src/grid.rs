//! Coordinate mapping between scene space, grid space, and storage indices.
//!
//! Scene space is continuous (scene units, one cell is `CELL_SIZE` wide).
//! Grid space is discrete with the origin at the top-left cell. Cells are
//! stored row-major, so index `y * GRID_SIZE + x` holds cell `(x, y)`.
//!
//! All functions are pure. On valid input each mapping is the exact inverse
//! of its counterpart.

use freightplan_core::constants::{CELL_SIZE, GRID_SIZE};
use freightplan_core::{GridError, GridPos, ScenePoint};

/// Maps a scene position to the grid cell containing it.
///
/// Uses floor division, so points left of or above the origin map to
/// negative cells instead of rounding toward cell 0.
pub fn scene_to_grid(point: ScenePoint) -> GridPos {
    let cell = f64::from(CELL_SIZE);
    GridPos::new(
        (point.x / cell).floor() as i32,
        (point.y / cell).floor() as i32,
    )
}

/// Maps a grid cell to the scene position of its top-left corner.
pub fn grid_to_scene(pos: GridPos) -> ScenePoint {
    let cell = f64::from(CELL_SIZE);
    ScenePoint::new(f64::from(pos.x) * cell, f64::from(pos.y) * cell)
}

/// Scene position of the centre of a grid cell.
pub fn cell_center(pos: GridPos) -> ScenePoint {
    let half = f64::from(CELL_SIZE) / 2.0;
    let corner = grid_to_scene(pos);
    ScenePoint::new(corner.x + half, corner.y + half)
}

/// Maps a grid cell to its storage index.
pub fn grid_to_index(pos: GridPos) -> Result<usize, GridError> {
    let pos = check_grid_pos(pos)?;
    Ok((pos.y * GRID_SIZE + pos.x) as usize)
}

/// Maps a storage index back to its grid cell.
///
/// Indices at or beyond `GRID_SIZE²` yield positions that fail
/// [`is_valid_grid_pos`]. Rows past `i32::MAX` saturate.
pub fn index_to_grid(index: usize) -> GridPos {
    let size = GRID_SIZE as usize;
    let row = i32::try_from(index / size).unwrap_or(i32::MAX);
    GridPos::new((index % size) as i32, row)
}

/// Whether `pos` lies within the grid.
pub fn is_valid_grid_pos(pos: GridPos) -> bool {
    (0..GRID_SIZE).contains(&pos.x) && (0..GRID_SIZE).contains(&pos.y)
}

/// Whether a scene position lies over the grid.
pub fn is_valid_scene_pos(point: ScenePoint) -> bool {
    is_valid_grid_pos(scene_to_grid(point))
}

/// Returns `pos` unchanged if it lies within the grid.
pub fn check_grid_pos(pos: GridPos) -> Result<GridPos, GridError> {
    if is_valid_grid_pos(pos) {
        Ok(pos)
    } else {
        Err(GridError::BoundaryViolation {
            x: pos.x,
            y: pos.y,
            dimension: GRID_SIZE,
        })
    }
}

/// Side length of the whole grid in scene units.
pub fn grid_extent() -> f64 {
    f64::from(CELL_SIZE) * f64::from(GRID_SIZE)
}

/// Number of cells in a floor.
pub const fn cell_count() -> usize {
    (GRID_SIZE as usize) * (GRID_SIZE as usize)
}
