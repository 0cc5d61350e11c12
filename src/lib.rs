//! # freightplan
//!
//! A grid-based floor planner for freighters: lay out rooms, corridors,
//! junctions, and stairs on up to fourteen decks.
//!
//! ## Architecture
//!
//! freightplan is organized as a workspace with multiple crates:
//!
//! 1. **freightplan-core** - Coordinates, identifiers, errors, event bus
//! 2. **freightplan-settings** - Configuration file handling
//! 3. **freightplan-designer** - Floor model, placement editor, plan manager
//! 4. **freightplan** - Main binary that wires the crates together
//!
//! The view layer is not part of this workspace. It subscribes to the
//! [`EventBus`] and forwards pointer and keyboard input to the active
//! [`Editor`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use freightplan_core::data;
pub use freightplan_designer as designer;

pub use freightplan_core::{
    AppEvent, ComponentId, EditorEvent, Error, EventBus, EventCategory, EventFilter, GridPos,
    PlanEvent, PlanId, Result, Rotation, ScenePoint,
};

pub use freightplan_designer::{ComponentCatalog, Editor, Plan, PlanManager};

pub use freightplan_settings::{Config, EditorSettings, UiSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// The wired-up application state: settings, shared catalog and event bus,
/// and the plan manager.
pub struct Application {
    pub config: Config,
    pub bus: Arc<EventBus>,
    pub catalog: Arc<ComponentCatalog>,
    pub plans: PlanManager,
}

impl Application {
    /// Build the application from a loaded configuration, with one new plan
    /// open.
    pub fn new(config: Config) -> Self {
        let bus = Arc::new(EventBus::new());
        bus.subscribe(EventFilter::All, |event| {
            tracing::debug!("{}", event.description());
        });

        let catalog = Arc::new(ComponentCatalog::builtin());
        let mut plans = PlanManager::new(
            Arc::clone(&catalog),
            Arc::clone(&bus),
            config.editor.clone(),
        );
        plans.new_plan();

        Self {
            config,
            bus,
            catalog,
            plans,
        }
    }

    /// Load the configuration at `path` (defaults if missing) and build the
    /// application.
    pub fn from_config_path(path: &Path) -> anyhow::Result<Self> {
        let config = Config::load_or_default(path)?;
        Ok(Self::new(config))
    }

    /// Open the plan at `path` and remember it in the recent-files list.
    pub fn open_plan(&mut self, path: impl Into<PathBuf>) -> Result<PlanId> {
        let path = path.into();
        let id = self.plans.open_plan(&path)?;
        self.config.add_recent_file(path);
        Ok(id)
    }

    /// Save a plan under a new path and remember it in the recent-files
    /// list.
    pub fn save_plan_as(&mut self, id: PlanId, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.plans.save_plan_as(id, path.clone())?;
        self.config.add_recent_file(path);
        Ok(())
    }
}
