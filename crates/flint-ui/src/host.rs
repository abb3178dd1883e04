//! The seam between the controller and whatever draws the palette.

/// Window and process primitives the controller asks the host for.
///
/// Calls are fire-and-forget: the host logs its own failures and the
/// controller never waits on them.
#[cfg_attr(test, mockall::automock)]
pub trait HostShell: Send + Sync {
    /// Resize the palette window.
    fn set_size(&self, width: f32, height: f32);

    /// Center the window on the active screen.
    fn set_position_centered(&self);

    /// Hide the window.
    fn hide(&self);

    /// Give keyboard focus to the keyword input.
    fn focus_input(&self);

    /// Open an application by path.
    fn launch(&self, path: &str);
}

// =============================================================================
// Recording Host (for testing)
// =============================================================================
