//! Activation outcome types.

use serde::{Deserialize, Serialize};

/// What activating the current selection did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivationOutcome {
    /// The host launch primitive was invoked with this path.
    Launched { path: String },

    /// The surface switched to this plugin's view.
    SurfaceOpened { plugin_id: String },

    /// Nothing was selected.
    NoOp,
}
