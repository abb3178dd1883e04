//! Error types for the Flint launcher.
//!
//! None of these reach the user: the controller degrades lookup and plugin
//! failures to empty results and hands launch failures to the host.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// External application lookup failed.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Filesystem error while scanning.
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index could not answer the query.
    #[error("Index error: {0}")]
    Index(String),

    /// The lookup did not resolve in time.
    #[error("Lookup timeout after {duration:?}")]
    Timeout { duration: Duration },

    /// The worker running the lookup went away.
    #[error("Channel error: {0}")]
    Channel(String),
}

/// Host launch primitive failed.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The opener process could not be spawned.
    #[error("Failed to launch '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The opener exited unsuccessfully.
    #[error("Opener for '{path}' exited with status {code:?}")]
    Exited { path: String, code: Option<i32> },
}

/// Plugin-specific errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The match predicate failed.
    #[error("Plugin '{plugin}' match failed: {message}")]
    Match { plugin: String, message: String },

    /// Rendering the surface failed.
    #[error("Plugin '{plugin}' render failed: {message}")]
    Render { plugin: String, message: String },

    /// Lua script error.
    #[error("Lua error: {0}")]
    Lua(String),

    /// The plugin panicked.
    #[error("Plugin '{plugin}' panicked: {message}")]
    Panicked { plugin: String, message: String },

    /// Plugin lookup by id failed.
    #[error("Plugin not found: {0}")]
    NotFound(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_error_display() {
        let err = PluginError::Match {
            plugin: "json".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Plugin 'json' match failed: boom");
    }

    #[test]
    fn test_lookup_timeout_display() {
        let err = LookupError::Timeout {
            duration: Duration::from_millis(250),
        };
        assert!(err.to_string().contains("250ms"));
    }
}
