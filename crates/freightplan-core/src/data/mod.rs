//! Shared data types: coordinates, component identifiers, rotations, and
//! stable identifiers.

mod component;
mod ids;
mod position;
mod rotation;

pub use component::ComponentId;
pub use ids::{FloorId, PlanId, SectorId};
pub use position::{GridPos, ScenePoint};
pub use rotation::{Rotation, RotationDirection};
