//! Lua-backed plugin capability.

use mlua::{Function, Value};

use flint_core::PluginError;

use crate::capability::{PluginCapability, PluginInfo, Surface};

/// A plugin registered from Lua via `flint.register`.
pub struct LuaPlugin {
    id: String,
    info: PluginInfo,
    matches_fn: Function,
    render_fn: Option<Function>,
}

impl LuaPlugin {
    pub fn new(
        id: impl Into<String>,
        info: PluginInfo,
        matches_fn: Function,
        render_fn: Option<Function>,
    ) -> Self {
        Self {
            id: id.into(),
            info,
            matches_fn,
            render_fn,
        }
    }

    fn render_error(&self, message: impl Into<String>) -> PluginError {
        PluginError::Render {
            plugin: self.id.clone(),
            message: message.into(),
        }
    }

    /// Convert a render return value into a surface.
    ///
    /// Strings become text; `{ kind = "pre" | "text", body = ... }` tables
    /// pick the surface kind; nil is an empty surface.
    fn value_to_surface(&self, value: Value) -> Result<Surface, PluginError> {
        match value {
            Value::Nil => Ok(Surface::Empty),
            Value::String(s) => Ok(Surface::Text(
                s.to_str().map_err(|e| self.render_error(e.to_string()))?.to_string(),
            )),
            Value::Table(table) => {
                let kind: Option<String> = table
                    .get("kind")
                    .map_err(|e| self.render_error(e.to_string()))?;
                let body: String = table
                    .get("body")
                    .map_err(|e| self.render_error(e.to_string()))?;

                match kind.as_deref() {
                    None | Some("text") => Ok(Surface::Text(body)),
                    Some("pre") => Ok(Surface::Preformatted(body)),
                    Some(other) => Err(self.render_error(format!("unknown surface kind '{}'", other))),
                }
            }
            other => Err(self.render_error(format!(
                "render returned unsupported {}",
                other.type_name()
            ))),
        }
    }
}

impl std::fmt::Debug for LuaPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LuaPlugin")
            .field("id", &self.id)
            .field("info", &self.info)
            .field("has_render", &self.render_fn.is_some())
            .finish()
    }
}

impl PluginCapability for LuaPlugin {
    fn describe(&self) -> PluginInfo {
        self.info.clone()
    }

    fn matches(&self, keyword: &str) -> Result<bool, PluginError> {
        self.matches_fn
            .call::<bool>(keyword)
            .map_err(|e| PluginError::Match {
                plugin: self.id.clone(),
                message: e.to_string(),
            })
    }

    fn render(&self, keyword: &str) -> Result<Surface, PluginError> {
        let Some(render_fn) = &self.render_fn else {
            return Ok(Surface::Empty);
        };

        let value = render_fn
            .call::<Value>(keyword)
            .map_err(|e| self.render_error(e.to_string()))?;
        self.value_to_surface(value)
    }
}
