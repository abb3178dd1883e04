//! JSON formatter plugin.
//!
//! Matches any keyword that parses as a JSON document and renders it
//! pretty-printed.

use flint_core::PluginError;

use crate::capability::{PluginCapability, PluginInfo, Surface};

pub struct JsonPlugin;

impl JsonPlugin {
    pub const ID: &'static str = "json";
}

impl PluginCapability for JsonPlugin {
    fn describe(&self) -> PluginInfo {
        PluginInfo::new("JSON")
    }

    fn matches(&self, keyword: &str) -> Result<bool, PluginError> {
        Ok(serde_json::from_str::<serde_json::Value>(keyword).is_ok())
    }

    fn render(&self, keyword: &str) -> Result<Surface, PluginError> {
        let render_error = |message: String| PluginError::Render {
            plugin: Self::ID.to_string(),
            message,
        };

        let value: serde_json::Value =
            serde_json::from_str(keyword).map_err(|e| render_error(e.to_string()))?;
        let pretty = serde_json::to_string_pretty(&value).map_err(|e| render_error(e.to_string()))?;

        Ok(Surface::Preformatted(pretty))
    }
}
