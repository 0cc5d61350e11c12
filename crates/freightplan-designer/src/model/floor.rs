//! A single level of a plan.

use freightplan_core::constants::{CELL_SIZE, MAX_LEVEL, MIN_LEVEL};
use freightplan_core::{
    ContractViolation, Error, FloorId, GridError, GridPos, PlanError, Result, SectorId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cell::{Cell, Tile};
use super::ids::HasStableId;
use super::sector::{Color, GridRect, Sector};
use crate::grid;

/// Rejects levels outside `MIN_LEVEL..=MAX_LEVEL`.
pub fn check_level(level: u8) -> std::result::Result<u8, ContractViolation> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(ContractViolation::new(
            "level",
            format!("{} is not between {} and {}", level, MIN_LEVEL, MAX_LEVEL),
        ))
    }
}

/// One deck of the freighter: a fixed grid of cells plus sectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    id: FloorId,
    name: String,
    level: u8,
    visible: bool,
    locked: bool,
    #[serde(skip)]
    dirty: bool,
    /// Row-major, one per grid position
    cells: Vec<Cell>,
    sectors: BTreeMap<SectorId, Sector>,
    next_sector_id: u32,
}

impl Floor {
    /// Create an empty, visible, unlocked floor.
    pub fn new(id: FloorId, name: impl Into<String>, level: u8) -> Result<Self> {
        check_level(level)?;
        Ok(Self::new_unchecked(id, name.into(), level))
    }

    pub(crate) fn new_unchecked(id: FloorId, name: String, level: u8) -> Self {
        let cells = (0..grid::cell_count())
            .map(|index| Cell::new(grid::index_to_grid(index), CELL_SIZE))
            .collect();
        Self {
            id,
            name,
            level,
            visible: true,
            locked: false,
            dirty: false,
            cells,
            sectors: BTreeMap::new(),
            next_sector_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.dirty = true;
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: u8) -> Result<()> {
        self.level = check_level(level)?;
        self.dirty = true;
        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// A locked floor rejects tile changes.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Whether the floor changed since it was last marked clean.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn cell_at(&self, pos: GridPos) -> std::result::Result<&Cell, GridError> {
        let index = grid::grid_to_index(pos)?;
        Ok(&self.cells[index])
    }

    pub fn cell_at_mut(&mut self, pos: GridPos) -> std::result::Result<&mut Cell, GridError> {
        let index = grid::grid_to_index(pos)?;
        Ok(&mut self.cells[index])
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells holding a tile.
    pub fn occupied_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_empty())
    }

    pub fn tile_at(&self, pos: GridPos) -> std::result::Result<Option<Tile>, GridError> {
        Ok(self.cell_at(pos)?.tile())
    }

    /// Put a tile at `pos`, returning the tile it replaced.
    pub fn set_tile(
        &mut self,
        pos: GridPos,
        tile: Tile,
    ) -> std::result::Result<Option<Tile>, GridError> {
        let index = grid::grid_to_index(pos)?;
        self.check_unlocked()?;
        let previous = self.cells[index].set_tile(tile);
        self.dirty = true;
        Ok(previous)
    }

    /// Empty the cell at `pos`, returning what it held.
    ///
    /// Clearing an empty cell leaves the floor clean.
    pub fn take_tile(&mut self, pos: GridPos) -> std::result::Result<Option<Tile>, GridError> {
        let index = grid::grid_to_index(pos)?;
        self.check_unlocked()?;
        let taken = self.cells[index].take_tile();
        if taken.is_some() {
            self.dirty = true;
        }
        Ok(taken)
    }

    /// Remove every tile. Returns how many were removed.
    pub fn clear(&mut self) -> std::result::Result<usize, GridError> {
        self.check_unlocked()?;
        let removed = self
            .cells
            .iter_mut()
            .filter_map(Cell::take_tile)
            .count();
        if removed > 0 {
            self.dirty = true;
        }
        Ok(removed)
    }

    /// True when no cell holds a tile.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn tile_count(&self) -> usize {
        self.occupied_cells().count()
    }

    pub fn check_unlocked(&self) -> std::result::Result<(), GridError> {
        if self.locked {
            tracing::warn!("Rejected change to locked {}", self.id);
            Err(GridError::FloorLocked { floor: self.id.0 })
        } else {
            Ok(())
        }
    }

    // Sectors

    /// Add a sector, assigning it the next identifier of this floor.
    pub fn add_sector(
        &mut self,
        rect: GridRect,
        name: impl Into<String>,
        color: Color,
    ) -> Result<SectorId> {
        let id = SectorId(self.next_sector_id);
        let sector = Sector::new(id, rect, name, color)?;
        self.next_sector_id += 1;
        self.sectors.insert(id, sector);
        self.dirty = true;
        Ok(id)
    }

    pub fn remove_sector(&mut self, id: SectorId) -> Result<Sector> {
        let sector = self
            .sectors
            .remove(&id)
            .ok_or(PlanError::SectorNotFound { id: id.0 })?;
        self.dirty = true;
        Ok(sector)
    }

    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.get(&id)
    }

    pub fn sector_mut(&mut self, id: SectorId) -> Option<&mut Sector> {
        self.sectors.get_mut(&id)
    }

    /// Sectors ordered by identifier.
    pub fn sectors(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.values()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Sectors covering `pos`.
    pub fn sectors_at(&self, pos: GridPos) -> impl Iterator<Item = &Sector> {
        self.sectors.values().filter(move |s| s.rect().contains(pos))
    }

    /// Copy this floor to another level.
    ///
    /// Not supported yet: the ownership of sector ids in the copy is
    /// undecided.
    pub fn clone_to_level(&self, level: u8) -> Result<Floor> {
        check_level(level)?;
        tracing::warn!("clone_to_level requested for {} but is not supported", self.id);
        Err(Error::unsupported("Floor::clone_to_level"))
    }

    /// Merge another floor into this one.
    ///
    /// Not supported yet: conflict resolution between tiles is undecided.
    pub fn merge(&mut self, other: &Floor) -> Result<()> {
        tracing::warn!(
            "merge of {} into {} requested but is not supported",
            other.id,
            self.id
        );
        Err(Error::unsupported("Floor::merge"))
    }
}

impl HasStableId for Floor {
    type Id = FloorId;

    fn id(&self) -> FloorId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freightplan_core::constants::GRID_SIZE;
    use freightplan_core::{ComponentId, Rotation};

    fn floor() -> Floor {
        Floor::new(FloorId(0), "Floor 1", 1).unwrap()
    }

    #[test]
    fn test_cells_are_row_major() {
        let floor = floor();
        assert_eq!(floor.cells().count(), (GRID_SIZE * GRID_SIZE) as usize);
        for (index, cell) in floor.cells().enumerate() {
            assert_eq!(grid::grid_to_index(cell.pos()), Ok(index));
        }
    }

    #[test]
    fn test_take_tile_from_empty_cell_stays_clean() {
        let mut floor = floor();
        assert_eq!(floor.take_tile(GridPos::new(1, 1)), Ok(None));
        assert!(!floor.is_dirty());
    }

    #[test]
    fn test_clear_counts_removed_tiles() {
        let mut floor = floor();
        let tile = Tile::new(ComponentId::Junction, Rotation::ZERO);
        floor.set_tile(GridPos::new(0, 0), tile).unwrap();
        floor.set_tile(GridPos::new(3, 9), tile).unwrap();
        assert_eq!(floor.clear(), Ok(2));
        assert!(floor.is_empty());
    }

    #[test]
    fn test_sector_ids_are_not_reused() {
        let mut floor = floor();
        let a = floor
            .add_sector(GridRect::new(0, 0, 2, 2), "A", Color::default())
            .unwrap();
        floor.remove_sector(a).unwrap();
        let b = floor
            .add_sector(GridRect::new(0, 0, 2, 2), "B", Color::default())
            .unwrap();
        assert_ne!(a, b);
    }
}
