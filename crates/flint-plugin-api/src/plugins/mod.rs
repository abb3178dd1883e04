//! Built-in plugins.

use std::sync::Arc;

use crate::registry::PluginRegistry;

mod json;

pub use json::JsonPlugin;

/// Register every built-in plugin.
pub fn register_builtins(registry: &PluginRegistry) {
    registry.register(JsonPlugin::ID, Arc::new(JsonPlugin));
}
