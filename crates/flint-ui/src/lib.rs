//! Command palette controller for the Flint launcher.
//!
//! This crate provides:
//! - `Controller` for merging, selection, activation, and surface mode
//! - `Launcher`, the event loop that runs lookups and publishes snapshots
//! - The `Backend` lookup seam and the `HostShell` window seam
//! - A configurable keymap

pub mod actions;
pub mod backend;
pub mod controller;
pub mod host;
pub mod keymap;
pub mod launcher;
pub mod model;
pub mod platform;

// Re-export commonly used types
pub use backend::{Backend, RuntimeBackend};
pub use controller::{Controller, KeyResponse, LookupCompletion, LookupRequest};
pub use host::HostShell;
pub use keymap::Keymap;
pub use launcher::{Launcher, LauncherEvent, LauncherHandle};
pub use model::{ControllerSnapshot, ResultList, SurfaceMode};
