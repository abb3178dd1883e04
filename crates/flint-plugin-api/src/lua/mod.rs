//! Lua bindings for the Plugin API.
//!
//! This module implements the `flint` global namespace with:
//! - `flint.register(id, plugin)` - Register a Lua plugin
//! - `flint.log(message)` - Write to the launcher log
//!
//! Plugins hold handles into the Lua state, so the `Lua` passed to
//! [`register_flint_api`] must outlive the registry.

use std::path::Path;
use std::sync::Arc;

use mlua::{Lua, Result as LuaResult, Table};

use flint_core::PluginError;

use crate::registry::PluginRegistry;

mod parse;
mod plugin;

pub use parse::parse_plugin;
pub use plugin::LuaPlugin;

/// Register the `flint` API in a Lua state.
pub fn register_flint_api(lua: &Lua, registry: Arc<PluginRegistry>) -> LuaResult<()> {
    let flint = lua.create_table()?;

    // flint.register(id, plugin)
    {
        let registry = Arc::clone(&registry);
        let register_fn = lua.create_function(move |_lua, (id, table): (String, Table)| {
            let plugin = parse_plugin(&id, table)?;
            registry.register(id, Arc::new(plugin));
            Ok(())
        })?;
        flint.set("register", register_fn)?;
    }

    // flint.log(message)
    {
        let log_fn = lua.create_function(|_lua, message: String| {
            tracing::info!("[lua] {}", message);
            Ok(())
        })?;
        flint.set("log", log_fn)?;
    }

    lua.globals().set("flint", flint)?;
    Ok(())
}

/// Read and execute an init.lua file.
pub fn load_init_lua(lua: &Lua, path: &Path) -> Result<(), PluginError> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| PluginError::Lua(format!("Failed to read {}: {}", path.display(), e)))?;

    lua.load(&source)
        .set_name(path.to_string_lossy())
        .exec()
        .map_err(|e| PluginError::Lua(e.to_string()))
}
