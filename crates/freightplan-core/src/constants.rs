//! Application-wide constants.

/// Side length of the square floor grid, in cells.
pub const GRID_SIZE: i32 = 64;

/// Size of a single grid cell in scene units (pixels at zoom 1.0).
pub const CELL_SIZE: i32 = 32;

/// Maximum number of floors a plan can hold.
pub const MAX_FLOORS: usize = 14;

/// Lowest level a floor can represent.
pub const MIN_LEVEL: u8 = 1;

/// Highest level a floor can represent.
pub const MAX_LEVEL: u8 = 14;

/// Allowed view zoom factors, ascending.
pub const ZOOM_FACTORS: [f64; 10] = [0.25, 0.33, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0];

/// Default zoom factor.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Opacity of the ghost tile drawn under the cursor.
pub const GHOST_OPACITY: f64 = 0.75;

/// Space kept between the grid edge and the viewport edge while panning.
pub const SCENE_MARGIN: f64 = 10.0;

/// Rotation applied per brush rotation step, in degrees.
pub const ROTATION_STEP: u16 = 90;
