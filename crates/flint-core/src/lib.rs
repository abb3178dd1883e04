//! Core types for the Flint launcher.
//!
//! This crate contains shared data structures that are used across all Flint crates:
//! - Application and ResultEntry types for the merged list
//! - Activation outcomes
//! - Configuration types
//! - Error types

mod action;
mod config;
mod error;
mod item;

pub use action::ActivationOutcome;
pub use config::{config_dir, config_path, init_lua_path, AppConfig, IndexConfig, WindowConfig};
pub use error::{ConfigError, LaunchError, LookupError, PluginError};
pub use item::{Application, ResultEntry};
