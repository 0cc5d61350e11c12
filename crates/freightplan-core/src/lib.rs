//! # freightplan Core
//!
//! Core types, errors, and the event bus shared by the freightplan crates.
//! Provides the grid/scene coordinate types, component identifiers, stable
//! identifiers, and the events the editor publishes to the view layer.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{
    ComponentId, FloorId, GridPos, PlanId, Rotation, RotationDirection, ScenePoint, SectorId,
};

pub use error::{ContractViolation, Error, GridError, PlanError, Result};

pub use event_bus::{
    AppEvent, EditorEvent, EventBus, EventBusError, EventCategory, EventFilter,
    PlanEvent, SubscriptionId,
};
