//! Configuration types.
//!
//! Geometry, index and keymap settings live in `config.toml`; plugins are
//! registered from `init.lua`. Both sit in the same config directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Runtime configuration loaded from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window geometry
    #[serde(default)]
    pub window: WindowConfig,

    /// Application index settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Extra key bindings, key name to action name, e.g. "ctrl+n" = "cursor_down"
    #[serde(default)]
    pub keymap: BTreeMap<String, String>,
}

impl AppConfig {
    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Window geometry in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    /// Height of the keyword input row.
    pub input_height: f32,
    /// Height of one result row.
    pub item_height: f32,
    /// Padding added below a non-empty list.
    pub list_extra_height: f32,
    /// Surface height for plugins that don't declare one.
    pub plugin_surface_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 760.0,
            input_height: 56.0,
            item_height: 48.0,
            list_extra_height: 16.0,
            plugin_surface_height: 320.0,
        }
    }
}

impl WindowConfig {
    /// Window size for a list of `count` results.
    pub fn list_size(&self, count: usize) -> (f32, f32) {
        let extra = if count > 0 {
            self.list_extra_height
        } else {
            0.0
        };
        (
            self.width,
            self.input_height + self.item_height * count as f32 + extra,
        )
    }

    /// Window size for a plugin surface. `None` uses the configured default.
    pub fn surface_size(&self, surface_height: Option<f32>) -> (f32, f32) {
        let height = surface_height.unwrap_or(self.plugin_surface_height);
        (self.width, self.input_height + height)
    }
}

/// Application index settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directories scanned for application bundles.
    pub directories: Vec<PathBuf>,
    /// Maximum results per lookup.
    pub limit: usize,
    /// Lookup timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            directories: vec![PathBuf::from("/Applications")],
            limit: 5,
            timeout_ms: 5_000,
        }
    }
}

impl IndexConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("flint"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the path to init.lua.
pub fn init_lua_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("init.lua"))
}
