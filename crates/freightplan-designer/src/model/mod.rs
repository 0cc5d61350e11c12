//! Floor plan data model
//!
//! A [`Plan`] holds up to 14 [`Floor`]s; each floor is a fixed square grid of
//! [`Cell`]s plus any number of labelled [`Sector`]s. The plan's file
//! metadata lives in its [`Document`].

mod cell;
mod document;
mod floor;
mod ids;
mod plan;
mod sector;

pub use cell::{Cell, Tile};
pub use document::Document;
pub use floor::{check_level, Floor};
pub use ids::HasStableId;
pub use plan::Plan;
pub use sector::{Color, GridRect, Sector};
