//! Per-plugin failure isolation.
//!
//! A plugin that errors or panics must not take down the merge for the other
//! plugins or the keystroke that triggered it. These wrappers turn every
//! failure into the degraded value: no match, or an error surface.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use flint_core::PluginError;

use crate::capability::{PluginCapability, PluginInfo, Surface};

/// Call `describe`, falling back to the plugin id as the name.
pub fn guarded_describe(id: &str, plugin: &dyn PluginCapability) -> PluginInfo {
    match catch_unwind(AssertUnwindSafe(|| plugin.describe())) {
        Ok(info) => info,
        Err(payload) => {
            tracing::warn!("{} (in describe)", panicked(id, payload.as_ref()));
            PluginInfo::new(id)
        }
    }
}

/// Call `matches`; errors and panics count as no match.
pub fn guarded_matches(id: &str, plugin: &dyn PluginCapability, keyword: &str) -> bool {
    let err = match catch_unwind(AssertUnwindSafe(|| plugin.matches(keyword))) {
        Ok(Ok(matched)) => return matched,
        Ok(Err(e)) => e,
        Err(payload) => panicked(id, payload.as_ref()),
    };
    tracing::warn!("{} - treating as no match", err);
    false
}

/// Call `render`; errors and panics become [`Surface::Error`].
pub fn guarded_render(id: &str, plugin: &dyn PluginCapability, keyword: &str) -> Surface {
    let err = match catch_unwind(AssertUnwindSafe(|| plugin.render(keyword))) {
        Ok(Ok(surface)) => return surface,
        Ok(Err(e)) => e,
        Err(payload) => panicked(id, payload.as_ref()),
    };
    tracing::warn!("{}", err);
    Surface::Error(err.to_string())
}

fn panicked(id: &str, payload: &(dyn Any + Send)) -> PluginError {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };

    PluginError::Panicked {
        plugin: id.to_string(),
        message,
    }
}
