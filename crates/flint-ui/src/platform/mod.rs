//! Platform-specific implementations.
//!
//! This module provides the process-level launch primitive used by hosts.

mod launch;

pub use launch::{launch_application, launch_with};
