//! Configuration file support for the gym tools.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/gym/config.toml`.

use crate::{Error, Exercise, Result, WorkoutTemplate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub execution: ExecutionConfig,

    #[serde(default)]
    pub library: LibraryConfig,
}

/// Session display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// How many upcoming entries to show while running a workout
    #[serde(default = "default_upcoming_count")]
    pub upcoming_count: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            upcoming_count: default_upcoming_count(),
        }
    }
}

/// User-defined exercises and workouts, merged into the default catalog
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct LibraryConfig {
    #[serde(default)]
    pub exercises: Vec<Exercise>,

    #[serde(default)]
    pub workouts: Vec<WorkoutTemplate>,
}

fn default_upcoming_count() -> usize {
    5
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"));
        base.join("gym").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
