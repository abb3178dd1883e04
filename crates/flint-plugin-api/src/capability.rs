//! The plugin capability contract.
//!
//! Every plugin, built-in or Lua-scripted, implements [`PluginCapability`].
//! The controller only calls `describe` and `matches` while merging; `render`
//! runs lazily, once, when the user activates the plugin's entry.

use serde::{Deserialize, Serialize};

use flint_core::PluginError;

/// Static description of a plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Display name shown in the result list.
    pub name: String,

    /// Height the plugin surface wants. `None` uses the configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_height: Option<f32>,
}

impl PluginInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surface_height: None,
        }
    }

    pub fn with_surface_height(mut self, height: f32) -> Self {
        self.surface_height = Some(height);
        self
    }
}

/// Opaque render output, interpreted by the host's surface layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "lowercase")]
pub enum Surface {
    /// Nothing to show.
    Empty,
    /// Plain wrapped text.
    Text(String),
    /// Monospaced text, whitespace preserved.
    Preformatted(String),
    /// Rendering failed; the message is for the host log or a muted label.
    Error(String),
}

/// The capability every plugin implements.
///
/// `matches` runs synchronously on every keystroke for every registered
/// plugin, so it must be cheap and free of side effects.
pub trait PluginCapability: Send + Sync {
    /// Describe the plugin.
    fn describe(&self) -> PluginInfo;

    /// Test whether the keyword is something this plugin handles.
    fn matches(&self, keyword: &str) -> Result<bool, PluginError>;

    /// Produce the interactive surface for the keyword.
    fn render(&self, keyword: &str) -> Result<Surface, PluginError>;
}
