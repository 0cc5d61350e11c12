//! # Event Bus Module
//!
//! Decoupled communication between the editor model and the view layer.
//!
//! ## Overview
//!
//! - The editor and plan manager publish typed events without knowing who
//!   listens
//! - The view layer subscribes with a filter and redraws in response
//! - Handlers run synchronously on the publishing thread, in publish order,
//!   so a hover update is always observed before the repaint request that
//!   follows it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use freightplan_core::event_bus::{AppEvent, EditorEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Tile]),
//!     |event| {
//!         if let AppEvent::Editor(EditorEvent::TilePlaced { pos, .. }) = event {
//!             println!("tile placed at {pos}");
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
