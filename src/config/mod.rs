//! Configuration module for circuit-vis
//!
//! Settings are read from a TOML file. Lookup order:
//!
//! 1. an explicit path (`--config`)
//! 2. `circuit-vis.toml` in the working directory
//! 3. the platform config directory under `dev.circuit-vis`:
//!    - **Linux**: `~/.config/dev.circuit-vis/config.toml`
//!    - **macOS**: `~/Library/Application Support/dev.circuit-vis/config.toml`
//!    - **Windows**: `%APPDATA%\dev.circuit-vis\config.toml`
//!
//! Missing files fall back to defaults. An explicit path that cannot be read
//! is an error.
//!
//! # Example
//!
//! ```toml
//! [graph]
//! rankdir = "LR"
//! node_shape = "rectangle"
//!
//! [sinks]
//! gormanium = "Gormanium concentrate"
//!
//! [render]
//! weight_precision = 3
//! legend = false
//! ```

pub mod settings;

pub use settings::*;

use crate::error::{CircuitError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "dev.circuit-vis";

/// Config filename inside the app config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Config filename looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "circuit-vis.toml";

/// Get the application config directory path
pub fn app_config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Candidate config paths in lookup order, excluding an explicit path
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = app_config_dir() {
        paths.push(dir.join(CONFIG_FILE));
    }
    paths
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub graph: GraphSettings,

    #[serde(default)]
    pub sinks: SinkNames,

    #[serde(default)]
    pub render: RenderSettings,
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CircuitError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CircuitError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml(&content).map_err(|e| e.with_context(format!("{:?}", path)))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must load. Otherwise the first default location that
    /// exists is used, and a broken file there only produces a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                Ok(Self::load(&path).unwrap_or_else(|e| {
                    tracing::warn!("Failed to load config, using defaults: {}", e);
                    Self::default()
                }))
            }
            None => Ok(Self::default()),
        }
    }

    /// Save the config to disk as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CircuitError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CircuitError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            CircuitError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }

    /// Pretty JSON view of the effective configuration
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CircuitError::Config(format!("Failed to serialize config: {}", e)))
    }
}
