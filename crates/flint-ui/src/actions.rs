//! Controller actions that keys can be bound to.

// =============================================================================
// Actions
// =============================================================================

/// What a bound key does to the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the selection one row down.
    CursorDown,
    /// Move the selection one row up.
    CursorUp,
    /// Activate the selected entry.
    Submit,
    /// Consume the key without doing anything.
    Swallow,
    /// Close any plugin surface and hide the window.
    Hide,
}

impl Action {
    /// Name used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CursorDown => "cursor_down",
            Action::CursorUp => "cursor_up",
            Action::Submit => "submit",
            Action::Swallow => "swallow",
            Action::Hide => "hide",
        }
    }
}

// =============================================================================
// Action Lookup
// =============================================================================

/// Look up an action by its config name.
pub fn action_from_name(name: &str) -> Option<Action> {
    match name {
        // Navigation
        "cursor_down" => Some(Action::CursorDown),
        "cursor_up" => Some(Action::CursorUp),

        // Execution
        "submit" => Some(Action::Submit),
        "swallow" => Some(Action::Swallow),
        "hide" => Some(Action::Hide),

        _ => None,
    }
}

/// Get all available action names.
pub fn available_actions() -> &'static [&'static str] {
    &["cursor_down", "cursor_up", "submit", "swallow", "hide"]
}
