//! Render helpers: ghost tile and grid lines.

use freightplan_core::constants::{CELL_SIZE, GRID_SIZE};
use freightplan_core::{ComponentId, GridPos, Rotation, ScenePoint};

use super::Editor;
use crate::catalog::IconRef;
use crate::grid;

/// Translucent preview of the brush over the hovered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostPreview {
    pub pos: GridPos,
    /// Top-left corner of the hovered cell
    pub scene_pos: ScenePoint,
    pub component: ComponentId,
    pub icon: IconRef,
    pub rotation: Rotation,
    pub opacity: f64,
}

/// A line segment in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: ScenePoint,
    pub to: ScenePoint,
}

impl Editor {
    /// The ghost tile to draw, if a brush is selected and a cell hovered.
    pub fn ghost_preview(&self) -> Option<GhostPreview> {
        let pos = self.hovered_cell?;
        let component = self.brush_component()?;
        Some(GhostPreview {
            pos,
            scene_pos: grid::grid_to_scene(pos),
            component: component.id(),
            icon: component.icon().clone(),
            rotation: self.rotation,
            opacity: self.settings.ghost_opacity,
        })
    }

    /// Interior grid lines, vertical first. Empty when the grid is hidden.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        if !self.settings.show_grid {
            return Vec::new();
        }
        let extent = grid::grid_extent();
        let offsets: Vec<f64> = (1..GRID_SIZE)
            .map(|i| f64::from(i * CELL_SIZE))
            .collect();

        let vertical = offsets.iter().map(|&x| GridLine {
            from: ScenePoint::new(x, 0.0),
            to: ScenePoint::new(x, extent),
        });
        let horizontal = offsets.iter().map(|&y| GridLine {
            from: ScenePoint::new(0.0, y),
            to: ScenePoint::new(extent, y),
        });
        vertical.chain(horizontal).collect()
    }

    /// Show or hide the grid lines.
    pub fn set_show_grid(&mut self, show: bool) {
        if self.settings.show_grid != show {
            self.settings.show_grid = show;
            self.request_repaint();
        }
    }
}
