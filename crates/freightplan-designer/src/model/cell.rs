//! Grid cells and the tiles placed in them.

use freightplan_core::{ComponentId, GridPos, Rotation, ScenePoint};
use serde::{Deserialize, Serialize};

use crate::grid;

/// A component placed in a cell, with its orientation.
///
/// Two tiles are the same tile only if both component and rotation match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub component: ComponentId,
    pub rotation: Rotation,
}

impl Tile {
    pub fn new(component: ComponentId, rotation: Rotation) -> Self {
        Self {
            component,
            rotation,
        }
    }
}

/// One square of a floor grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pos: GridPos,
    size: i32,
    tile: Option<Tile>,
}

impl Cell {
    pub fn new(pos: GridPos, size: i32) -> Self {
        Self {
            pos,
            size,
            tile: None,
        }
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }

    /// Side length in scene units.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Top-left corner in scene space.
    pub fn scene_pos(&self) -> ScenePoint {
        grid::grid_to_scene(self.pos)
    }

    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }

    pub fn component(&self) -> Option<ComponentId> {
        self.tile.map(|t| t.component)
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// Puts `tile` in the cell, returning the tile it replaced.
    pub fn set_tile(&mut self, tile: Tile) -> Option<Tile> {
        self.tile.replace(tile)
    }

    /// Empties the cell.
    pub fn clear_tile(&mut self) {
        self.tile = None;
    }

    /// Empties the cell, returning what it held.
    pub fn take_tile(&mut self) -> Option<Tile> {
        self.tile.take()
    }
}
