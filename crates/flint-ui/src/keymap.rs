//! Key bindings for the command palette.
//!
//! Defaults are registered first, then the `[keymap]` table from config.toml,
//! so user bindings take precedence.

use std::collections::{BTreeMap, HashMap};

use crate::actions::{action_from_name, available_actions, Action};

// =============================================================================
// Keystroke Parsing
// =============================================================================

/// Canonicalize a key name.
///
/// Hosts report DOM-style names ("ArrowDown", "Enter"); config files use
/// short names ("down", "ctrl+n"). Both map to the same lowercase,
/// `+`-separated form.
pub fn normalize_key(s: &str) -> String {
    split_keystroke(&s.trim().to_lowercase())
        .iter()
        .map(|part| match part.as_str() {
            "arrowdown" => "down",
            "arrowup" => "up",
            "return" => "enter",
            "esc" => "escape",
            other => other,
        })
        .collect::<Vec<_>>()
        .join("+")
}

/// Split "ctrl+n" or "ctrl-n" into parts.
///
/// `+` and `-` only separate non-empty parts, so "-", "+" and "ctrl+-"
/// keep the literal key.
fn split_keystroke(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, c) in chars.iter().enumerate() {
        let separator = matches!(c, '+' | '-') && !current.is_empty() && i + 1 < chars.len();
        if separator {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(*c);
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

// =============================================================================
// Keymap
// =============================================================================

/// Mapping from key names to actions.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
}

impl Keymap {
    /// An empty keymap. Every key falls through to the host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keymap with the default palette bindings.
    pub fn with_defaults() -> Self {
        let mut keymap = Self::new();
        keymap.register_default_bindings();
        keymap
    }

    fn register_default_bindings(&mut self) {
        self.set("down", Action::CursorDown);
        self.set("up", Action::CursorUp);
        self.set("enter", Action::Submit);
        self.set("tab", Action::Swallow);
        self.set("escape", Action::Hide);
    }

    /// Bind a key, replacing any previous binding.
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(normalize_key(key), action);
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.bindings.get(&normalize_key(key)).copied()
    }

    /// Apply `key = "action"` overrides. Unknown action names are skipped.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) {
        for (key, name) in overrides {
            match action_from_name(name) {
                Some(action) => {
                    tracing::debug!("Bound {} -> {}", key, action.name());
                    self.set(key, action);
                }
                None => tracing::warn!(
                    "Unknown action '{}' for key '{}' (expected one of: {})",
                    name,
                    key,
                    available_actions().join(", ")
                ),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
