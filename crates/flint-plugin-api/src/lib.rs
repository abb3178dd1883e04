//! Plugin API for the Flint launcher.
//!
//! This crate provides the plugin system including:
//! - The `PluginCapability` contract (describe / matches / render)
//! - An explicitly constructed, insertion-ordered `PluginRegistry`
//! - Per-plugin failure isolation
//! - Built-in plugins (JSON formatter)
//! - Lua-scripted plugins registered from init.lua

pub mod capability;
pub mod guard;
pub mod lua;
pub mod plugins;
pub mod registry;

// Re-export commonly used types
pub use capability::{PluginCapability, PluginInfo, Surface};
pub use lua::{load_init_lua, register_flint_api, LuaPlugin};
pub use plugins::{register_builtins, JsonPlugin};
pub use registry::PluginRegistry;

// Re-export flint_core types for convenience
pub use flint_core::{PluginError, ResultEntry};
