//! Application index for the Flint launcher.
//!
//! Answers keyword lookups with installed application bundles. This is the
//! external lookup the controller queries; ranking lives here, not in the
//! controller.

mod apps;

pub use apps::{rank, scan_directories, scan_directory, AppIndex};
