//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{ComponentId, FloorId, GridPos, PlanId, Rotation, ScenePoint};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Editor-level changes the view must reflect
    Editor(EditorEvent),
    /// Plan lifecycle
    Plan(PlanEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Editor(e) => e.category(),
            AppEvent::Plan(_) => EventCategory::Plan,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Editor(e) => e.description(),
            AppEvent::Plan(e) => e.description(),
        }
    }
}

impl From<EditorEvent> for AppEvent {
    fn from(event: EditorEvent) -> Self {
        AppEvent::Editor(event)
    }
}

impl From<PlanEvent> for AppEvent {
    fn from(event: PlanEvent) -> Self {
        AppEvent::Plan(event)
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Tile placement and removal.
    Tile,
    /// Hover highlight and ghost preview.
    Hover,
    /// Brush, zoom, floor selection, and repaint requests.
    View,
    /// Plan lifecycle.
    Plan,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Tile => write!(f, "Tile"),
            EventCategory::Hover => write!(f, "Hover"),
            EventCategory::View => write!(f, "View"),
            EventCategory::Plan => write!(f, "Plan"),
        }
    }
}

/// Changes published by an editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// A tile was placed and should be drawn.
    TilePlaced {
        /// Plan the editor is bound to.
        plan: PlanId,
        /// Floor that was changed.
        floor: FloorId,
        /// Grid cell of the tile.
        pos: GridPos,
        /// Top-left scene position of the cell.
        scene_pos: ScenePoint,
        /// Placed component.
        component: ComponentId,
        /// Rotation the tile was placed with.
        rotation: Rotation,
    },
    /// A tile was removed and should be erased.
    TileRemoved {
        /// Plan the editor is bound to.
        plan: PlanId,
        /// Floor that was changed.
        floor: FloorId,
        /// Grid cell that was cleared.
        pos: GridPos,
        /// Component that occupied the cell.
        component: ComponentId,
    },
    /// The hovered cell changed (`None` clears the highlight).
    HoverChanged {
        /// Plan the editor is bound to.
        plan: PlanId,
        /// Newly hovered cell.
        cell: Option<GridPos>,
    },
    /// A different brush was selected.
    BrushChanged {
        /// Plan the editor is bound to.
        plan: PlanId,
        /// Selected component, if any.
        component: Option<ComponentId>,
    },
    /// The brush was rotated.
    RotationChanged {
        /// Plan the editor is bound to.
        plan: PlanId,
        /// New brush rotation.
        rotation: Rotation,
    },
    /// The zoom factor changed.
    ZoomChanged {
        /// Plan the editor is bound to.
        plan: PlanId,
        /// New zoom factor.
        factor: f64,
    },
    /// Another floor became the editing target.
    FloorSwitched {
        /// Plan the editor is bound to.
        plan: PlanId,
        /// Position of the floor in the plan.
        index: usize,
        /// Identifier of the floor.
        floor: FloorId,
    },
    /// The view should repaint.
    RepaintRequested {
        /// Plan the editor is bound to.
        plan: PlanId,
    },
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::TilePlaced { .. } | EditorEvent::TileRemoved { .. } => {
                EventCategory::Tile
            }
            EditorEvent::HoverChanged { .. } => EventCategory::Hover,
            EditorEvent::BrushChanged { .. }
            | EditorEvent::RotationChanged { .. }
            | EditorEvent::ZoomChanged { .. }
            | EditorEvent::FloorSwitched { .. }
            | EditorEvent::RepaintRequested { .. } => EventCategory::View,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::TilePlaced {
                pos,
                component,
                rotation,
                ..
            } => format!("Placed {} at {} ({})", component, pos, rotation),
            EditorEvent::TileRemoved { pos, component, .. } => {
                format!("Removed {} at {}", component, pos)
            }
            EditorEvent::HoverChanged { cell: Some(pos), .. } => format!("Hovering {}", pos),
            EditorEvent::HoverChanged { cell: None, .. } => "Hover cleared".to_string(),
            EditorEvent::BrushChanged {
                component: Some(component),
                ..
            } => format!("Brush set to {}", component),
            EditorEvent::BrushChanged { component: None, .. } => "Brush cleared".to_string(),
            EditorEvent::RotationChanged { rotation, .. } => {
                format!("Brush rotation {}", rotation)
            }
            EditorEvent::ZoomChanged { factor, .. } => format!("Zoom {:.2}x", factor),
            EditorEvent::FloorSwitched { index, floor, .. } => {
                format!("Switched to {} at index {}", floor, index)
            }
            EditorEvent::RepaintRequested { .. } => "Repaint requested".to_string(),
        }
    }
}

/// Plan lifecycle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanEvent {
    /// A new, empty plan was created.
    Created {
        /// Identifier of the plan.
        plan: PlanId,
        /// Display name of the plan.
        name: String,
    },
    /// A plan was opened from a path.
    Opened {
        /// Identifier of the plan.
        plan: PlanId,
        /// Path the plan is bound to.
        path: PathBuf,
    },
    /// A save is about to happen.
    Saving {
        /// Identifier of the plan.
        plan: PlanId,
    },
    /// A save completed.
    Saved {
        /// Identifier of the plan.
        plan: PlanId,
        /// Path that was written.
        path: PathBuf,
    },
    /// A plan is being closed.
    Closing {
        /// Identifier of the plan.
        plan: PlanId,
    },
    /// The active plan changed.
    Activated {
        /// Identifier of the plan.
        plan: PlanId,
    },
}

impl PlanEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            PlanEvent::Created { plan, name } => format!("{} created as '{}'", plan, name),
            PlanEvent::Opened { plan, path } => format!("{} opened from {}", plan, path.display()),
            PlanEvent::Saving { plan } => format!("{} saving", plan),
            PlanEvent::Saved { plan, path } => format!("{} saved to {}", plan, path.display()),
            PlanEvent::Closing { plan } => format!("{} closing", plan),
            PlanEvent::Activated { plan } => format!("{} activated", plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let plan = PlanId::new();
        let placed = AppEvent::from(EditorEvent::TilePlaced {
            plan,
            floor: FloorId(0),
            pos: GridPos::new(1, 2),
            scene_pos: ScenePoint::new(32.0, 64.0),
            component: ComponentId::Stairs,
            rotation: Rotation::ZERO,
        });
        assert_eq!(placed.category(), EventCategory::Tile);

        let hover = AppEvent::from(EditorEvent::HoverChanged { plan, cell: None });
        assert_eq!(hover.category(), EventCategory::Hover);

        let repaint = AppEvent::from(EditorEvent::RepaintRequested { plan });
        assert_eq!(repaint.category(), EventCategory::View);

        let closing = AppEvent::from(PlanEvent::Closing { plan });
        assert_eq!(closing.category(), EventCategory::Plan);
    }

    #[test]
    fn test_descriptions() {
        let plan = PlanId::new();
        let event = EditorEvent::TileRemoved {
            plan,
            floor: FloorId(3),
            pos: GridPos::new(5, 5),
            component: ComponentId::Junction,
        };
        assert_eq!(event.description(), "Removed Junction at (5, 5)");

        let event = EditorEvent::ZoomChanged { plan, factor: 1.5 };
        assert_eq!(event.description(), "Zoom 1.50x");
    }
}
