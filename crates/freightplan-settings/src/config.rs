//! Configuration and settings management for freightplan
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in the platform-specific
//! configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (grid appearance, ghost preview, initial zoom)
//! - UI preferences (window size, palette layout, colours)
//! - Recent files

use freightplan_core::constants::{DEFAULT_ZOOM, GHOST_OPACITY, SCENE_MARGIN, ZOOM_FACTORS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Editing area settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Draw grid lines over the editing area
    pub show_grid: bool,
    /// Grid line colour as `#rrggbb`
    pub grid_color: String,
    /// Grid line opacity (0.0 - 1.0)
    pub grid_opacity: f64,
    /// Opacity of the ghost tile shown under the cursor (0.0 - 1.0)
    pub ghost_opacity: f64,
    /// Space between the grid edge and the viewport edge while panning
    pub scene_margin: f64,
    /// Zoom factor new editors start at; must be one of the allowed factors
    pub default_zoom: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_color: "#808080".to_string(),
            grid_opacity: 1.0,
            ghost_opacity: GHOST_OPACITY,
            scene_margin: SCENE_MARGIN,
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
    /// Number of swatch columns in the component palette
    pub palette_columns: u8,
    /// Scene background colour as `#rrggbb`
    pub background_color: String,
    /// Editing area fill colour as `#rrggbb`
    pub edit_area_color: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            palette_columns: 3,
            background_color: "#d3d3d3".to_string(),
            edit_area_color: "#5e6787".to_string(),
        }
    }
}

fn default_max_recent_files() -> usize {
    10
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recent files list, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    /// Maximum number of recent files to remember
    #[serde(default = "default_max_recent_files")]
    pub max_recent_files: usize,
    /// Editing area settings
    #[serde(default)]
    pub editor: EditorSettings,
    /// UI preferences
    #[serde(default)]
    pub ui: UiSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            max_recent_files: default_max_recent_files(),
            editor: EditorSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the configuration file, if the platform has a
    /// configuration directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("freightplan").join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let editor = &self.editor;
        check_unit_range("editor.grid_opacity", editor.grid_opacity)?;
        check_unit_range("editor.ghost_opacity", editor.ghost_opacity)?;

        if !(editor.scene_margin.is_finite() && editor.scene_margin >= 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.scene_margin".to_string(),
                value: editor.scene_margin.to_string(),
            });
        }

        if !ZOOM_FACTORS.contains(&editor.default_zoom) {
            return Err(ConfigError::InvalidSetting {
                key: "editor.default_zoom".to_string(),
                reason: format!("{} is not one of {:?}", editor.default_zoom, ZOOM_FACTORS),
            });
        }

        check_hex_color("editor.grid_color", &editor.grid_color)?;
        check_hex_color("ui.background_color", &self.ui.background_color)?;
        check_hex_color("ui.edit_area_color", &self.ui.edit_area_color)?;

        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "ui.window_size".to_string(),
                value: format!("{}x{}", self.ui.window_width, self.ui.window_height),
            });
        }

        if self.ui.palette_columns == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "ui.palette_columns".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.max_recent_files);
    }
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> std::result::Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn check_unit_range(key: &str, value: f64) -> std::result::Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_hex_color(key: &str, value: &str) -> std::result::Result<(), ConfigError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidSetting {
            key: key.to_string(),
            reason: format!("'{}' is not a #rrggbb colour", value),
        })
    }
}
