//! freightplan Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, UiSettings};
pub use error::{ConfigError, SettingsError};
