//! State model for the Flint command palette.
//!
//! All types are host-independent for testability.

mod state;

pub use state::{ControllerSnapshot, ResultList, SurfaceMode};
