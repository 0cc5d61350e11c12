//! Multi-floor plans.

use freightplan_core::constants::{MAX_FLOORS, MIN_LEVEL};
use freightplan_core::{FloorId, PlanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::document::Document;
use super::floor::{check_level, Floor};
use super::ids::HasStableId;

/// An ordered stack of floors plus file metadata.
///
/// A plan always holds between one and `MAX_FLOORS` floors. Floor ids are
/// handed out in increasing order and never reused, even after removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    floors: Vec<Floor>,
    next_floor_id: u32,
    document: Document,
}

impl Plan {
    /// Create a plan backed by `file_path` with a single floor at level 1.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let mut plan = Self {
            floors: Vec::with_capacity(MAX_FLOORS),
            next_floor_id: 0,
            document: Document::new(file_path),
        };
        let id = plan.claim_next_floor_id();
        plan.floors.push(Floor::new_unchecked(
            id,
            default_floor_name(MIN_LEVEL),
            MIN_LEVEL,
        ));
        plan
    }

    /// Display name, taken from the backing file.
    pub fn name(&self) -> String {
        self.document.name()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn modified(&self) -> bool {
        self.document.modified()
    }

    /// Append a floor. It is named `"Floor {level}"` unless `name` is given.
    pub fn add_floor(&mut self, level: u8, name: Option<&str>) -> Result<FloorId> {
        if self.floors.len() >= MAX_FLOORS {
            tracing::warn!("Plan '{}' already has {} floors", self.name(), MAX_FLOORS);
            return Err(PlanError::CapacityExceeded { max: MAX_FLOORS }.into());
        }
        let level = check_level(level)?;
        let name = name.map_or_else(|| default_floor_name(level), str::to_string);

        let id = self.claim_next_floor_id();
        self.floors.push(Floor::new_unchecked(id, name, level));
        self.document.touch();
        tracing::debug!("Added {} at level {}", id, level);
        Ok(id)
    }

    /// Remove the floor at `index`. The last remaining floor cannot be
    /// removed.
    pub fn remove_floor(&mut self, index: usize) -> Result<Floor> {
        self.check_index(index)?;
        if self.floors.len() == 1 {
            tracing::warn!("Refusing to remove the last floor of '{}'", self.name());
            return Err(PlanError::InvariantViolation {
                reason: "a plan must keep at least one floor".to_string(),
            }
            .into());
        }
        let floor = self.floors.remove(index);
        self.document.touch();
        tracing::debug!("Removed {}", floor.id());
        Ok(floor)
    }

    pub fn floor_at(&self, index: usize) -> Result<&Floor> {
        self.check_index(index)?;
        Ok(&self.floors[index])
    }

    pub fn floor_at_mut(&mut self, index: usize) -> Result<&mut Floor> {
        self.check_index(index)?;
        Ok(&mut self.floors[index])
    }

    pub fn floor_by_id(&self, id: FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id() == id)
    }

    pub fn floor_by_id_mut(&mut self, id: FloorId) -> Option<&mut Floor> {
        self.floors.iter_mut().find(|f| f.id() == id)
    }

    pub fn floor_index(&self, id: FloorId) -> Option<usize> {
        self.floors.iter().position(|f| f.id() == id)
    }

    /// Move the floor at `from` so it ends up at `to`.
    pub fn move_floor(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let floor = self.floors.remove(from);
            self.floors.insert(to, floor);
            self.document.touch();
        }
        Ok(())
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub(crate) fn floors_mut(&mut self) -> &mut [Floor] {
        &mut self.floors
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// True when no floor holds a tile.
    pub fn is_empty(&self) -> bool {
        self.floors.iter().all(Floor::is_empty)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.floors.len() {
            Ok(())
        } else {
            Err(PlanError::FloorIndexOutOfRange {
                index,
                len: self.floors.len(),
            }
            .into())
        }
    }

    fn claim_next_floor_id(&mut self) -> FloorId {
        let id = FloorId(self.next_floor_id);
        self.next_floor_id += 1;
        id
    }
}

fn default_floor_name(level: u8) -> String {
    format!("Floor {}", level)
}
