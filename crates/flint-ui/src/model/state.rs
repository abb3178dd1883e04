//! Controller state for the Flint command palette.
//!
//! These types are host-independent: the controller owns them and the host
//! only ever sees a [`ControllerSnapshot`].

use flint_core::{Application, ResultEntry};
use flint_plugin_api::Surface;
use serde::Serialize;

// =============================================================================
// Result List
// =============================================================================

/// The merged list shown under the input, plus the cursor into it.
///
/// Entries are always applications first, then plugin matches. The cursor is
/// clamped to the list and never wraps.
#[derive(Debug, Default, Clone)]
pub struct ResultList {
    /// Keyword this list was produced for.
    keyword: String,
    entries: Vec<ResultEntry>,
    cursor_index: usize,
}

impl ResultList {
    /// Build a list from lookup results and plugin matches, cursor on the
    /// first entry.
    pub fn merge(
        keyword: impl Into<String>,
        apps: Vec<Application>,
        plugin_matches: Vec<ResultEntry>,
    ) -> Self {
        let mut entries: Vec<ResultEntry> = apps.into_iter().map(ResultEntry::from).collect();
        entries.extend(plugin_matches);

        Self {
            keyword: keyword.into(),
            entries,
            cursor_index: 0,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor index, or `None` when there is nothing to select.
    pub fn cursor_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.cursor_index)
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor_index + 1 < self.entries.len() {
            self.cursor_index += 1;
        }
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        if self.cursor_index > 0 {
            self.cursor_index -= 1;
        }
    }

    /// Entry under the cursor.
    pub fn cursor_entry(&self) -> Option<&ResultEntry> {
        self.entries.get(self.cursor_index)
    }
}

// =============================================================================
// Surface Mode
// =============================================================================

/// What the palette shows below the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SurfaceMode {
    /// The merged result list.
    #[default]
    List,

    /// A plugin's rendered surface.
    PluginSurface {
        plugin_id: String,
        /// Keyword the surface was rendered for. Never updated after opening.
        keyword: String,
        surface: Surface,
    },
}

impl SurfaceMode {
    pub fn is_list(&self) -> bool {
        matches!(self, SurfaceMode::List)
    }

    /// Id of the plugin whose surface is open.
    pub fn plugin_id(&self) -> Option<&str> {
        match self {
            SurfaceMode::PluginSurface { plugin_id, .. } => Some(plugin_id),
            SurfaceMode::List => None,
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything a host needs to draw the palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControllerSnapshot {
    /// Keyword of the committed list.
    pub keyword: String,
    pub entries: Vec<ResultEntry>,
    pub selected: Option<usize>,
    pub mode: SurfaceMode,
    /// Generation of the most recent keyword change.
    pub generation: u64,
}

// =============================================================================
// Tests
// =============================================================================
