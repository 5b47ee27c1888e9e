//! Configuration structs with sensible defaults and RON persistence.
//!
//! Grid defaults are stored as raw wire discriminants rather than enums so
//! that an out-of-range value in a hand-edited file degrades to the
//! built-in default at the point of use instead of failing the whole load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config file name inside the mod config directory.
const CONFIG_FILE: &str = "lodestore.ron";

/// Top-level mod configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModConfig {
    /// Default grid settings applied to freshly-configured grids.
    pub grid: GridDefaultsConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Default values for a new grid's settings, as raw wire discriminants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridDefaultsConfig {
    /// Default view type.
    pub view_type: i32,
    /// Default sorting type.
    pub sorting_type: i32,
    /// Default sorting direction.
    pub sorting_direction: i32,
    /// Default search box mode.
    pub search_box_mode: i32,
    /// Default grid size.
    pub size: i32,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn"). Empty uses the
    /// built-in default.
    pub log_level: String,
}

impl Default for GridDefaultsConfig {
    fn default() -> Self {
        Self {
            view_type: 0,         // all stacks
            sorting_type: 0,      // by quantity
            sorting_direction: 1, // descending
            search_box_mode: 0,   // plain search box
            size: 1,              // medium
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: String::new(),
        }
    }
}

// --- Load / Save / Reload ---

impl ModConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: ModConfig = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = ModConfig::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let new_config: ModConfig = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
