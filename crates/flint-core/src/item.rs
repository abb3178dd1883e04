//! Result entry types for the merged list.

use serde::{Deserialize, Serialize};

/// A launchable application returned by the external lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Display name (the bundle name).
    pub name: String,

    /// Filesystem path handed to the launch primitive.
    pub path: String,

    /// Icon file name inside the bundle, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Application {
    /// Create an application entry without an icon.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: None,
        }
    }
}

/// One row of the merged result list.
///
/// Entries are immutable once committed; a new keyword replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResultEntry {
    /// An external-index hit.
    Application(Application),

    /// A registered plugin whose predicate matched the keyword.
    #[serde(rename_all = "camelCase")]
    PluginMatch {
        plugin_id: String,
        /// Name captured from the plugin's `describe()` at merge time.
        display_name: String,
    },
}

impl ResultEntry {
    /// Create a plugin match entry.
    pub fn plugin(plugin_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::PluginMatch {
            plugin_id: plugin_id.into(),
            display_name: display_name.into(),
        }
    }

    /// Primary display text.
    pub fn title(&self) -> &str {
        match self {
            ResultEntry::Application(app) => &app.name,
            ResultEntry::PluginMatch { display_name, .. } => display_name,
        }
    }

    pub fn is_application(&self) -> bool {
        matches!(self, ResultEntry::Application(_))
    }

    /// The plugin id, for plugin matches.
    pub fn plugin_id(&self) -> Option<&str> {
        match self {
            ResultEntry::PluginMatch { plugin_id, .. } => Some(plugin_id),
            ResultEntry::Application(_) => None,
        }
    }
}

impl From<Application> for ResultEntry {
    fn from(app: Application) -> Self {
        ResultEntry::Application(app)
    }
}
