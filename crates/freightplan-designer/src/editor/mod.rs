//! Placement editor
//!
//! An [`Editor`] is bound to one plan and edits its active floor. It owns
//! all transient interaction state (brush, rotation, hover, drag memory,
//! pan, zoom) and reports every visible change on the shared event bus, so
//! the view layer never has to inspect grid state to stay in sync.
//!
//! Tile and hover operations live here; pointer and keyboard dispatch is in
//! `input`, and render helpers in `preview`.

mod input;
mod preview;

pub use input::{Key, Modifiers, MouseButton, MouseButtons, WheelOrientation};
pub use preview::{GhostPreview, GridLine};

use std::sync::Arc;

use freightplan_core::{
    ComponentId, EditorEvent, EventBus, FloorId, GridPos, PlanId, Result, Rotation,
    RotationDirection, ScenePoint,
};
use freightplan_settings::EditorSettings;

use crate::catalog::{Component, ComponentCatalog};
use crate::grid;
use crate::model::{Floor, HasStableId, Plan, Tile};
use crate::viewport::{ViewPoint, Viewport};

/// Middle-button drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PanState {
    last_view_pos: ViewPoint,
}

/// Placement controller for one plan.
#[derive(Debug)]
pub struct Editor {
    plan_id: PlanId,
    plan: Plan,
    current_floor: usize,
    brush: Option<ComponentId>,
    rotation: Rotation,
    hovered_cell: Option<GridPos>,
    /// Cell the pointer was last seen over, valid or not
    last_hover_pos: Option<GridPos>,
    /// Cell the last button action was evaluated for
    last_tile_pos: Option<GridPos>,
    pan: Option<PanState>,
    viewport: Viewport,
    settings: EditorSettings,
    catalog: Arc<ComponentCatalog>,
    bus: Arc<EventBus>,
}

impl Editor {
    /// Bind a new editor to `plan`, editing its first floor.
    ///
    /// The view starts centred on the grid at the configured default zoom.
    pub fn new(
        plan: Plan,
        catalog: Arc<ComponentCatalog>,
        bus: Arc<EventBus>,
        settings: EditorSettings,
    ) -> Self {
        let mut viewport = Viewport::default();
        if let Err(err) = viewport.set_zoom(settings.default_zoom) {
            tracing::warn!("Ignoring default zoom: {}", err);
        }
        let extent = grid::grid_extent();
        viewport.center_on(ScenePoint::new(extent / 2.0, extent / 2.0));
        viewport.clamp_to(viewport.scene_rect(settings.scene_margin));

        Self {
            plan_id: PlanId::new(),
            plan,
            current_floor: 0,
            brush: None,
            rotation: Rotation::ZERO,
            hovered_cell: None,
            last_hover_pos: None,
            last_tile_pos: None,
            pan: None,
            viewport,
            settings,
            catalog,
            bus,
        }
    }

    /// Identifier events from this editor carry.
    pub fn plan_id(&self) -> PlanId {
        self.plan_id
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub(crate) fn plan_mut(&mut self) -> &mut Plan {
        &mut self.plan
    }

    /// Unbind the editor, returning its plan.
    pub fn into_plan(self) -> Plan {
        self.plan
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Resize the editing area, e.g. when the window is resized.
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        let center = self.viewport.center();
        self.viewport.set_canvas_size(width, height);
        self.viewport.center_on(center);
        self.clamp_view();
        self.request_repaint();
    }

    // Floors

    pub fn current_floor_index(&self) -> usize {
        self.current_floor
    }

    /// The floor being edited.
    pub fn current_floor(&self) -> &Floor {
        &self.plan.floors()[self.current_floor]
    }

    pub fn current_floor_mut(&mut self) -> &mut Floor {
        let index = self.current_floor;
        &mut self.plan.floors_mut()[index]
    }

    /// Make the floor at `index` the editing target.
    pub fn set_current_floor(&mut self, index: usize) -> Result<()> {
        let floor = self.plan.floor_at(index)?.id();
        self.current_floor = index;
        self.last_tile_pos = None;
        tracing::info!("{}: editing {} (index {})", self.plan_id, floor, index);

        self.publish(EditorEvent::FloorSwitched {
            plan: self.plan_id,
            index,
            floor,
        });
        self.request_repaint();
        Ok(())
    }

    /// Add a floor to the plan. The editing target does not change.
    pub fn add_floor(&mut self, level: u8, name: Option<&str>) -> Result<FloorId> {
        self.plan.add_floor(level, name)
    }

    /// Remove the floor at `index`, keeping the editing target on the same
    /// floor where possible.
    pub fn remove_floor(&mut self, index: usize) -> Result<Floor> {
        let removed = self.plan.remove_floor(index)?;
        if index < self.current_floor {
            self.current_floor -= 1;
        } else if index == self.current_floor {
            let target = self.current_floor.min(self.plan.floor_count() - 1);
            self.set_current_floor(target)?;
        }
        Ok(removed)
    }

    // Tiles

    /// Place `component` at `pos` on the current floor with the brush
    /// rotation, replacing whatever tile was there.
    pub fn place_tile(&mut self, component: ComponentId, pos: GridPos) -> Result<()> {
        let tile = Tile::new(component, self.rotation);
        let floor = self.current_floor_mut();
        let previous = floor.set_tile(pos, tile)?;
        let floor = floor.id();
        self.plan.document_mut().touch();
        tracing::debug!("{}: placed {} at {} on {}", self.plan_id, component, pos, floor);

        if let Some(previous) = previous {
            self.publish(EditorEvent::TileRemoved {
                plan: self.plan_id,
                floor,
                pos,
                component: previous.component,
            });
        }
        self.publish(EditorEvent::TilePlaced {
            plan: self.plan_id,
            floor,
            pos,
            scene_pos: grid::grid_to_scene(pos),
            component,
            rotation: tile.rotation,
        });
        self.request_repaint();
        Ok(())
    }

    /// Clear the tile at `pos` on the current floor.
    ///
    /// Returns false, without publishing anything, when the cell was empty.
    pub fn remove_tile(&mut self, pos: GridPos) -> Result<bool> {
        let floor = self.current_floor_mut();
        let Some(tile) = floor.take_tile(pos)? else {
            return Ok(false);
        };
        let floor = floor.id();
        self.plan.document_mut().touch();
        tracing::debug!("{}: removed {} at {} on {}", self.plan_id, tile.component, pos, floor);

        self.publish(EditorEvent::TileRemoved {
            plan: self.plan_id,
            floor,
            pos,
            component: tile.component,
        });
        self.request_repaint();
        Ok(true)
    }

    pub fn tile_at(&self, pos: GridPos) -> Result<Option<Tile>> {
        Ok(self.current_floor().tile_at(pos)?)
    }

    // Hover

    pub fn hovered_cell(&self) -> Option<GridPos> {
        self.hovered_cell
    }

    /// Highlight `pos`.
    pub fn set_hovered_cell(&mut self, pos: GridPos) -> Result<()> {
        let pos = grid::check_grid_pos(pos)?;
        self.hovered_cell = Some(pos);
        self.publish(EditorEvent::HoverChanged {
            plan: self.plan_id,
            cell: Some(pos),
        });
        self.request_repaint();
        Ok(())
    }

    /// Highlight the cell under a scene position.
    pub fn set_hovered_scene_pos(&mut self, point: ScenePoint) -> Result<()> {
        self.set_hovered_cell(grid::scene_to_grid(point))
    }

    /// Remove the highlight.
    pub fn unset_hovered_cell(&mut self) {
        self.hovered_cell = None;
        self.publish(EditorEvent::HoverChanged {
            plan: self.plan_id,
            cell: None,
        });
        self.request_repaint();
    }

    /// Track the pointer over `pos`, highlighting it if it is on the grid.
    fn refresh_hover(&mut self, pos: GridPos) {
        self.last_hover_pos = Some(pos);
        if grid::is_valid_grid_pos(pos) {
            self.hovered_cell = Some(pos);
            self.publish(EditorEvent::HoverChanged {
                plan: self.plan_id,
                cell: Some(pos),
            });
            self.request_repaint();
        } else if self.hovered_cell.is_some() {
            self.unset_hovered_cell();
        }
    }

    // Brush

    pub fn brush(&self) -> Option<ComponentId> {
        self.brush
    }

    /// Catalog entry of the selected brush.
    pub fn brush_component(&self) -> Option<&Component> {
        self.brush.map(|id| self.catalog.by_id(id))
    }

    /// Select a brush, or `None` to erase only. Resets the rotation.
    pub fn set_brush(&mut self, component: Option<ComponentId>) {
        self.brush = component;
        self.rotation = Rotation::ZERO;
        tracing::debug!("{}: brush set to {:?}", self.plan_id, component);

        self.publish(EditorEvent::BrushChanged {
            plan: self.plan_id,
            component,
        });
        self.request_repaint();
    }

    /// Select the brush with the given display name.
    pub fn set_brush_by_name(&mut self, name: &str) -> Result<()> {
        let id = self.catalog.by_name(name)?.id();
        self.set_brush(Some(id));
        Ok(())
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Turn the brush one step.
    pub fn rotate_brush(&mut self, direction: RotationDirection) {
        self.rotation = self.rotation.rotated(direction);
        self.publish(EditorEvent::RotationChanged {
            plan: self.plan_id,
            rotation: self.rotation,
        });
        self.request_repaint();
    }

    // Zoom

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn set_zoom(&mut self, factor: f64) -> Result<bool> {
        let changed = self.viewport.set_zoom(factor)?;
        Ok(self.zoom_changed(changed))
    }

    pub fn zoom_in(&mut self) -> bool {
        let changed = self.viewport.zoom_in();
        self.zoom_changed(changed)
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.viewport.zoom_out();
        self.zoom_changed(changed)
    }

    pub fn reset_zoom(&mut self) -> bool {
        let changed = self.viewport.reset_zoom();
        self.zoom_changed(changed)
    }

    fn zoom_changed(&mut self, changed: bool) -> bool {
        if changed {
            self.clamp_view();
            tracing::debug!("{}: zoom {:.2}x", self.plan_id, self.viewport.zoom());
            self.publish(EditorEvent::ZoomChanged {
                plan: self.plan_id,
                factor: self.viewport.zoom(),
            });
        }
        changed
    }

    // Pan

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Start dragging the view. Hides the hover highlight until the drag
    /// ends.
    pub fn begin_pan(&mut self, view_pos: ViewPoint) {
        self.pan = Some(PanState {
            last_view_pos: view_pos,
        });
        self.unset_hovered_cell();
    }

    /// Scroll by the pointer movement since the last pan position.
    pub fn pan_to(&mut self, view_pos: ViewPoint) -> bool {
        let Some(state) = self.pan.as_mut() else {
            return false;
        };
        let dx = state.last_view_pos.x - view_pos.x;
        let dy = state.last_view_pos.y - view_pos.y;
        state.last_view_pos = view_pos;
        self.viewport.pan_by(dx, dy);
        self.clamp_view();
        self.request_repaint();
        true
    }

    /// Stop dragging the view and re-highlight the cell under the pointer.
    pub fn end_pan(&mut self, view_pos: ViewPoint) -> bool {
        if self.pan.take().is_none() {
            return false;
        }
        let pos = grid::scene_to_grid(self.viewport.view_to_scene(view_pos));
        self.refresh_hover(pos);
        true
    }

    /// Keep scrolling within the pannable scene bounds.
    fn clamp_view(&mut self) {
        let rect = self.viewport.scene_rect(self.settings.scene_margin);
        self.viewport.clamp_to(rect);
    }

    fn request_repaint(&self) {
        self.publish(EditorEvent::RepaintRequested { plan: self.plan_id });
    }

    fn publish(&self, event: EditorEvent) {
        if self.bus.publish(event).is_err() {
            tracing::trace!("{}: no subscribers for editor event", self.plan_id);
        }
    }
}
