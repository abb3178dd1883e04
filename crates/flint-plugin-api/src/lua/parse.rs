//! Lua table parsing for plugin registrations.

use mlua::{Function, Result as LuaResult, Table};

use crate::capability::PluginInfo;

use super::plugin::LuaPlugin;

/// Parse a plugin registration table.
///
/// Expected table shape:
/// ```lua
/// {
///   name = "string",                -- optional: defaults to the id
///   surface_height = 240,           -- optional
///   matches = function(keyword),    -- required: returns boolean
///   render = function(keyword),     -- optional: returns string or { kind, body }
/// }
/// ```
pub fn parse_plugin(id: &str, table: Table) -> LuaResult<LuaPlugin> {
    // Optional: name
    let name: Option<String> = table.get("name")?;

    // Optional: surface_height
    let surface_height: Option<f32> = table.get("surface_height")?;

    // Required: matches function
    let matches_fn = table.get::<Function>("matches").map_err(|_| {
        mlua::Error::RuntimeError(format!(
            "Plugin '{}' missing required 'matches' function",
            id
        ))
    })?;

    // Optional: render function
    let render_fn: Option<Function> = table.get("render")?;

    let info = PluginInfo {
        name: name.unwrap_or_else(|| id.to_string()),
        surface_height,
    };

    Ok(LuaPlugin::new(id, info, matches_fn, render_fn))
}
