//! Plugin Registry
//!
//! Maps plugin ids to capability implementations in registration order.
//! One registry is built at startup and shared with the controller and the
//! Lua bridge; there is no process-wide instance.

use parking_lot::RwLock;
use std::sync::Arc;

use flint_core::{PluginError, ResultEntry};

use crate::capability::{PluginCapability, Surface};
use crate::guard::{guarded_describe, guarded_matches, guarded_render};

struct RegisteredPlugin {
    id: String,
    plugin: Arc<dyn PluginCapability>,
}

/// The plugin registry.
pub struct PluginRegistry {
    /// Registered plugins, in registration order.
    plugins: RwLock<Vec<RegisteredPlugin>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(Vec::new()),
        }
    }

    /// Register a plugin under `id`.
    ///
    /// An existing registration with the same id is replaced and
    /// keeps its original position. Returns true if a plugin was replaced.
    pub fn register(&self, id: impl Into<String>, plugin: Arc<dyn PluginCapability>) -> bool {
        let id = id.into();
        let mut plugins = self.plugins.write();

        if let Some(existing) = plugins.iter_mut().find(|p| p.id == id) {
            existing.plugin = plugin;
            tracing::info!("Replaced plugin: {}", id);
            return true;
        }

        tracing::info!("Registered plugin: {}", id);
        plugins.push(RegisteredPlugin { id, plugin });
        false
    }

    /// Look up a plugin by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn PluginCapability>> {
        self.plugins
            .read()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.plugin.clone())
    }

    /// Plugin ids in registration order.
    pub fn ids(&self) -> Vec<String> {
        self.plugins.read().iter().map(|p| p.id.clone()).collect()
    }

    /// Get the number of registered plugins.
    pub fn count(&self) -> usize {
        self.plugins.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }

    /// Snapshot of (id, plugin) pairs in registration order.
    ///
    /// Callers iterate the snapshot so no lock is held while plugin code runs.
    pub fn entries(&self) -> Vec<(String, Arc<dyn PluginCapability>)> {
        self.plugins
            .read()
            .iter()
            .map(|p| (p.id.clone(), p.plugin.clone()))
            .collect()
    }

    /// Evaluate every plugin's predicate against `keyword`.
    ///
    /// Returns one entry per matching plugin, in registration order. A plugin
    /// whose predicate errors or panics is skipped.
    pub fn matching(&self, keyword: &str) -> Vec<ResultEntry> {
        self.entries()
            .into_iter()
            .filter(|(id, plugin)| guarded_matches(id, plugin.as_ref(), keyword))
            .map(|(id, plugin)| {
                let info = guarded_describe(&id, plugin.as_ref());
                ResultEntry::plugin(id, info.name)
            })
            .collect()
    }

    /// Declared surface height for a plugin, if it has one.
    pub fn surface_height(&self, id: &str) -> Option<f32> {
        let plugin = self.get(id)?;
        guarded_describe(id, plugin.as_ref()).surface_height
    }

    /// Render a plugin's surface for `keyword`.
    pub fn render(&self, id: &str, keyword: &str) -> Surface {
        match self.get(id) {
            Some(plugin) => guarded_render(id, plugin.as_ref(), keyword),
            None => {
                let err = PluginError::NotFound(id.to_string());
                tracing::warn!("Render requested: {}", err);
                Surface::Error(err.to_string())
            }
        }
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
