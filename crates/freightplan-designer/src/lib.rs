//! # freightplan Designer
//!
//! The grid placement editor and the floor model behind it.
//!
//! ## Core Components
//!
//! - **Grid**: pure mapping between scene coordinates, grid cells, and
//!   storage indices
//! - **Catalog**: immutable registry of placeable components
//! - **Model**: cells, sectors, floors, and plans with their invariants
//! - **Viewport**: discrete zoom steps and panning
//! - **Editor**: turns pointer and keyboard input into placements and
//!   removals on the active floor, publishing changes on the event bus
//! - **Plan manager**: the set of open plans, one editor each
//!
//! ## Architecture
//!
//! ```text
//! PlanManager
//!   └── Editor (one per open plan)
//!         ├── Plan
//!         │     └── Floor (up to 14)
//!         │           ├── Cell (GRID_SIZE x GRID_SIZE)
//!         │           └── Sector
//!         ├── Viewport (zoom/pan)
//!         ├── ComponentCatalog (shared)
//!         └── EventBus (shared) ──> view layer
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use freightplan_core::{ComponentId, EventBus, GridPos};
//! use freightplan_designer::{ComponentCatalog, PlanManager};
//!
//! let mut manager = PlanManager::new(
//!     Arc::new(ComponentCatalog::builtin()),
//!     Arc::new(EventBus::new()),
//!     Default::default(),
//! );
//! let plan = manager.new_plan();
//! if let Some(editor) = manager.editor_mut(plan) {
//!     editor.place_tile(ComponentId::CorridorStraight, GridPos::new(5, 5))?;
//! }
//! ```

pub mod catalog;
pub mod editor;
pub mod grid;
pub mod model;
pub mod plan_manager;
pub mod viewport;

pub use catalog::{Component, ComponentCatalog, IconRef};
pub use editor::{
    Editor, GhostPreview, GridLine, Key, Modifiers, MouseButton, MouseButtons, WheelOrientation,
};
pub use model::{
    check_level, Cell, Color, Document, Floor, GridRect, HasStableId, Plan, Sector, Tile,
};
pub use plan_manager::{PlanManager, PlanTab};
pub use viewport::{SceneRect, ViewPoint, Viewport};
