//! The command palette controller.
//!
//! Owns the merged result list, the selection cursor, and the surface mode.
//! Every mutation happens through `&mut self`, so one event is fully applied
//! before the next is looked at.
//!
//! ## Merging
//!
//! A keyword change produces a [`LookupRequest`] tagged with a fresh
//! generation. The caller runs the external lookup however it likes and feeds
//! the outcome back as a [`LookupCompletion`]. Completions whose generation is
//! no longer current are dropped, so the visible list always belongs to the
//! latest keyword.

use std::sync::Arc;

use flint_core::{ActivationOutcome, Application, LookupError, ResultEntry, WindowConfig};
use flint_plugin_api::PluginRegistry;

use crate::actions::Action;
use crate::host::HostShell;
use crate::keymap::Keymap;
use crate::model::{ControllerSnapshot, ResultList, SurfaceMode};

// =============================================================================
// Lookup Protocol
// =============================================================================

/// An external lookup the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub keyword: String,
}

/// The outcome of a lookup started from a [`LookupRequest`].
#[derive(Debug)]
pub struct LookupCompletion {
    pub generation: u64,
    pub result: Result<Vec<Application>, LookupError>,
}

/// Plugin matches computed for the in-flight generation.
#[derive(Debug)]
struct PendingMerge {
    generation: u64,
    keyword: String,
    plugin_matches: Vec<ResultEntry>,
}

/// How the controller handled a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// The host must not apply its default handling (cursor movement in the
    /// input, focus traversal).
    pub prevent_default: bool,
    /// Set when the key activated the selection.
    pub outcome: Option<ActivationOutcome>,
}

impl KeyResponse {
    fn unhandled() -> Self {
        Self {
            prevent_default: false,
            outcome: None,
        }
    }

    fn handled(outcome: Option<ActivationOutcome>) -> Self {
        Self {
            prevent_default: true,
            outcome,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

pub struct Controller {
    registry: Arc<PluginRegistry>,
    host: Arc<dyn HostShell>,
    window: WindowConfig,
    keymap: Keymap,

    list: ResultList,
    mode: SurfaceMode,

    /// Latest keyword received. Runs ahead of `list.keyword()` while a
    /// lookup is in flight.
    input: String,
    generation: u64,
    pending: Option<PendingMerge>,
}

impl Controller {
    pub fn new(
        registry: Arc<PluginRegistry>,
        host: Arc<dyn HostShell>,
        window: WindowConfig,
    ) -> Self {
        Self {
            registry,
            host,
            window,
            keymap: Keymap::with_defaults(),
            list: ResultList::default(),
            mode: SurfaceMode::List,
            input: String::new(),
            generation: 0,
            pending: None,
        }
    }

    /// Replace the default keymap.
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn list(&self) -> &ResultList {
        &self.list
    }

    pub fn mode(&self) -> &SurfaceMode {
        &self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    /// Entry under the cursor.
    pub fn current(&self) -> Option<&ResultEntry> {
        self.list.cursor_entry()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            keyword: self.list.keyword().to_string(),
            entries: self.list.entries().to_vec(),
            selected: self.list.cursor_index(),
            mode: self.mode.clone(),
            generation: self.generation,
        }
    }

    // -------------------------------------------------------------------------
    // Merging
    // -------------------------------------------------------------------------

    /// Record a new keyword and start a merge for it.
    ///
    /// An open plugin surface collapses immediately. The returned request
    /// supersedes every earlier one.
    pub fn begin_keyword(&mut self, keyword: impl Into<String>) -> LookupRequest {
        let keyword = keyword.into();
        if !self.mode.is_list() {
            tracing::debug!("Keyword changed, closing plugin surface");
            self.mode = SurfaceMode::List;
        }

        self.generation += 1;
        self.input = keyword.clone();
        self.pending = None;

        LookupRequest {
            generation: self.generation,
            keyword,
        }
    }

    /// Evaluate plugin predicates for a request.
    ///
    /// Runs synchronously while the external lookup is outstanding. Ignored
    /// if the request has already been superseded.
    pub fn scan_plugins(&mut self, request: &LookupRequest) {
        if request.generation != self.generation {
            return;
        }

        let plugin_matches = self.registry.matching(&request.keyword);
        self.pending = Some(PendingMerge {
            generation: request.generation,
            keyword: request.keyword.clone(),
            plugin_matches,
        });
    }

    /// Commit a lookup outcome. Returns false if it was stale.
    ///
    /// A failed lookup commits as an empty application list. Committing
    /// replaces the list and resets the cursor. The window is resized to the
    /// list unless a plugin surface is open; the surface keeps its height
    /// until it collapses.
    pub fn complete_lookup(&mut self, completion: LookupCompletion) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                "Discarding stale lookup (generation {}, current {})",
                completion.generation,
                self.generation
            );
            return false;
        }

        let (keyword, plugin_matches) = match self.pending.take() {
            Some(pending) if pending.generation == completion.generation => {
                (pending.keyword, pending.plugin_matches)
            }
            _ => {
                let keyword = self.input.clone();
                let matches = self.registry.matching(&keyword);
                (keyword, matches)
            }
        };

        let apps = completion.result.unwrap_or_else(|e| {
            tracing::warn!("Lookup for {:?} failed: {}", keyword, e);
            Vec::new()
        });

        self.list = ResultList::merge(keyword, apps, plugin_matches);
        if self.mode.is_list() {
            self.resize_to_list();
        }
        true
    }

    fn resize_to_list(&self) {
        let (width, height) = self.window.list_size(self.list.len());
        self.host.set_size(width, height);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn move_down(&mut self) {
        self.list.cursor_down();
        tracing::debug!("Cursor: {:?}", self.list.cursor_index());
    }

    pub fn move_up(&mut self) {
        self.list.cursor_up();
        tracing::debug!("Cursor: {:?}", self.list.cursor_index());
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    /// Act on the selected entry.
    ///
    /// Applications are handed to the host launcher. Plugin matches open the
    /// plugin's surface, rendered for the keyword currently in the input.
    pub fn activate(&mut self) -> ActivationOutcome {
        let Some(entry) = self.list.cursor_entry().cloned() else {
            return ActivationOutcome::NoOp;
        };

        match entry {
            ResultEntry::Application(app) => {
                tracing::info!("Launching {}", app.path);
                self.host.launch(&app.path);
                ActivationOutcome::Launched { path: app.path }
            }
            ResultEntry::PluginMatch { plugin_id, .. } => {
                let keyword = self.input.clone();
                let surface = self.registry.render(&plugin_id, &keyword);
                let height = self.registry.surface_height(&plugin_id);

                tracing::info!("Opening surface for plugin {}", plugin_id);
                self.mode = SurfaceMode::PluginSurface {
                    plugin_id: plugin_id.clone(),
                    keyword,
                    surface,
                };

                let (width, height) = self.window.surface_size(height);
                self.host.set_size(width, height);
                ActivationOutcome::SurfaceOpened { plugin_id }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    /// Route a key through the keymap.
    pub fn handle_key(&mut self, key: &str) -> KeyResponse {
        let Some(action) = self.keymap.action_for(key) else {
            return KeyResponse::unhandled();
        };

        match action {
            Action::CursorDown => {
                self.move_down();
                KeyResponse::handled(None)
            }
            Action::CursorUp => {
                self.move_up();
                KeyResponse::handled(None)
            }
            Action::Submit => KeyResponse::handled(Some(self.activate())),
            Action::Swallow => KeyResponse::handled(None),
            Action::Hide => {
                self.dismiss();
                KeyResponse::handled(None)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// React to the window gaining or losing focus.
    ///
    /// Losing focus closes any plugin surface and hides the window. Gaining
    /// it re-centers the window and focuses the input.
    pub fn focus_changed(&mut self, focused: bool) {
        if focused {
            self.host.set_position_centered();
            self.host.focus_input();
            return;
        }

        self.dismiss();
    }

    /// Close any plugin surface and hide the window.
    pub fn dismiss(&mut self) {
        if !self.mode.is_list() {
            self.mode = SurfaceMode::List;
            self.resize_to_list();
        }
        self.host.hide();
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("input", &self.input)
            .field("generation", &self.generation)
            .field("list", &self.list)
            .field("mode", &self.mode)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::{HostCall, RecordingHost};
    use crate::host::MockHostShell;
    use flint_core::PluginError;
    use flint_plugin_api::{register_builtins, PluginCapability, PluginInfo, Surface};

    struct Prefix {
        prefix: &'static str,
        height: Option<f32>,
    }

    impl PluginCapability for Prefix {
        fn describe(&self) -> PluginInfo {
            let info = PluginInfo::new(self.prefix.to_uppercase());
            match self.height {
                Some(h) => info.with_surface_height(h),
                None => info,
            }
        }

        fn matches(&self, keyword: &str) -> Result<bool, PluginError> {
            Ok(keyword.starts_with(self.prefix))
        }

        fn render(&self, keyword: &str) -> Result<Surface, PluginError> {
            Ok(Surface::Text(format!("rendered {}", keyword)))
        }
    }

    struct Faulty;

    impl PluginCapability for Faulty {
        fn describe(&self) -> PluginInfo {
            PluginInfo::new("Faulty")
        }

        fn matches(&self, _keyword: &str) -> Result<bool, PluginError> {
            panic!("predicate blew up")
        }

        fn render(&self, _keyword: &str) -> Result<Surface, PluginError> {
            Ok(Surface::Empty)
        }
    }

    fn app(name: &str) -> Application {
        Application::new(name, format!("/Applications/{}.app", name))
    }

    fn registry() -> Arc<PluginRegistry> {
        let registry = Arc::new(PluginRegistry::new());
        register_builtins(&registry);
        registry.register(
            "bang",
            Arc::new(Prefix {
                prefix: "!",
                height: Some(200.0),
            }),
        );
        registry
    }

    fn controller() -> (Controller, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::new());
        let controller = Controller::new(registry(), host.clone(), WindowConfig::default());
        (controller, host)
    }

    /// Run a full keyword change with the given lookup result.
    fn type_keyword(
        controller: &mut Controller,
        keyword: &str,
        result: Result<Vec<Application>, LookupError>,
    ) -> bool {
        let request = controller.begin_keyword(keyword);
        controller.scan_plugins(&request);
        controller.complete_lookup(LookupCompletion {
            generation: request.generation,
            result,
        })
    }

    #[test]
    fn test_merge_orders_applications_then_plugins() {
        let (mut controller, host) = controller();
        assert!(type_keyword(
            &mut controller,
            "!sa",
            Ok(vec![app("Safari"), app("Sonos")])
        ));

        let snapshot = controller.snapshot();
        let titles: Vec<_> = snapshot.entries.iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Safari", "Sonos", "!"]);
        assert_eq!(snapshot.keyword, "!sa");
        assert_eq!(snapshot.selected, Some(0));

        // 56 + 48 * 3 + 16
        assert_eq!(host.last_size(), Some((760.0, 216.0)));
    }

    #[test]
    fn test_empty_merge_shrinks_to_input() {
        let (mut controller, host) = controller();
        type_keyword(&mut controller, "zzz", Ok(vec![]));

        assert!(controller.list().is_empty());
        assert_eq!(controller.snapshot().selected, None);
        assert_eq!(host.last_size(), Some((760.0, 56.0)));
    }

    #[test]
    fn test_json_keyword_yields_plugin_entry() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, r#"{"a":1}"#, Ok(vec![]));

        let entries = controller.list().entries();
        assert_eq!(entries, &[ResultEntry::plugin("json", "JSON")]);
    }

    #[test]
    fn test_lookup_failure_degrades_to_plugins_only() {
        let (mut controller, host) = controller();
        let committed = type_keyword(
            &mut controller,
            "[1]",
            Err(LookupError::Index("index unavailable".to_string())),
        );

        assert!(committed);
        assert_eq!(controller.list().entries(), &[ResultEntry::plugin("json", "JSON")]);
        assert_eq!(host.last_size(), Some((760.0, 120.0)));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let (mut controller, host) = controller();

        let first = controller.begin_keyword("s");
        controller.scan_plugins(&first);
        let second = controller.begin_keyword("sa");
        controller.scan_plugins(&second);

        // Scanning an outdated request does nothing
        controller.scan_plugins(&first);

        assert!(controller.complete_lookup(LookupCompletion {
            generation: second.generation,
            result: Ok(vec![app("Safari")]),
        }));
        assert!(!controller.complete_lookup(LookupCompletion {
            generation: first.generation,
            result: Ok(vec![app("Slack"), app("Spotify"), app("Safari")]),
        }));

        assert_eq!(controller.list().keyword(), "sa");
        assert_eq!(controller.list().len(), 1);
        assert_eq!(
            host.calls()
                .iter()
                .filter(|c| matches!(c, HostCall::SetSize(..)))
                .count(),
            1
        );
    }

    #[test]
    fn test_completion_without_scan_still_includes_plugins() {
        let (mut controller, _host) = controller();
        let request = controller.begin_keyword("[]");
        controller.complete_lookup(LookupCompletion {
            generation: request.generation,
            result: Ok(vec![]),
        });
        assert_eq!(controller.list().len(), 1);
    }

    #[test]
    fn test_panicking_predicate_is_isolated() {
        let (mut controller, _host) = controller();
        controller.registry().register("faulty", Arc::new(Faulty));
        type_keyword(&mut controller, "!x", Ok(vec![]));

        assert_eq!(controller.list().entries(), &[ResultEntry::plugin("bang", "!")]);
    }

    #[test]
    fn test_commit_resets_selection() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, "s", Ok(vec![app("Safari"), app("Slack")]));
        controller.move_down();
        assert_eq!(controller.current().map(|e| e.title()), Some("Slack"));

        type_keyword(&mut controller, "sl", Ok(vec![app("Slack"), app("Sleep")]));
        assert_eq!(controller.snapshot().selected, Some(0));
        assert_eq!(controller.current().map(|e| e.title()), Some("Slack"));
    }

    #[test]
    fn test_navigation_clamps() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, "s", Ok(vec![app("Safari"), app("Slack")]));

        controller.move_up();
        assert_eq!(controller.snapshot().selected, Some(0));
        controller.move_down();
        controller.move_down();
        controller.move_down();
        assert_eq!(controller.snapshot().selected, Some(1));
    }

    #[test]
    fn test_activate_empty_list_is_noop() {
        let (mut controller, host) = controller();
        assert_eq!(controller.activate(), ActivationOutcome::NoOp);
        assert!(host.calls().is_empty());
        assert!(controller.mode().is_list());
    }

    #[test]
    fn test_activate_application_launches() {
        let (mut controller, host) = controller();
        type_keyword(&mut controller, "sa", Ok(vec![app("Safari")]));

        let outcome = controller.activate();
        assert_eq!(
            outcome,
            ActivationOutcome::Launched {
                path: "/Applications/Safari.app".to_string()
            }
        );
        assert_eq!(host.launched(), vec!["/Applications/Safari.app"]);
        assert!(controller.mode().is_list());
    }

    #[test]
    fn test_activate_plugin_opens_surface() {
        let (mut controller, host) = controller();
        type_keyword(&mut controller, r#"{"b":2}"#, Ok(vec![app("Unrelated")]));
        controller.move_down();

        let outcome = controller.activate();
        assert_eq!(
            outcome,
            ActivationOutcome::SurfaceOpened {
                plugin_id: "json".to_string()
            }
        );

        match controller.mode() {
            SurfaceMode::PluginSurface {
                plugin_id,
                keyword,
                surface,
            } => {
                assert_eq!(plugin_id, "json");
                assert_eq!(keyword, r#"{"b":2}"#);
                assert_eq!(surface, &Surface::Preformatted("{\n  \"b\": 2\n}".to_string()));
            }
            other => panic!("expected plugin surface, got {:?}", other),
        }

        // Default surface height: 56 + 320
        assert_eq!(host.last_size(), Some((760.0, 376.0)));
        assert!(host.launched().is_empty());
    }

    #[test]
    fn test_surface_renders_live_keyword() {
        let (mut controller, host) = controller();
        type_keyword(&mut controller, "!hi", Ok(vec![]));

        // Keyword typed but its lookup has not resolved
        controller.begin_keyword("!hi there");
        assert_eq!(controller.list().keyword(), "!hi");

        controller.activate();
        assert_eq!(host.last_size(), Some((760.0, 256.0)));
        match controller.mode() {
            SurfaceMode::PluginSurface { keyword, surface, .. } => {
                assert_eq!(keyword, "!hi there");
                assert_eq!(surface, &Surface::Text("rendered !hi there".to_string()));
            }
            other => panic!("expected plugin surface, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_under_open_surface_keeps_surface_size() {
        let (mut controller, host) = controller();
        type_keyword(&mut controller, "[1]", Ok(vec![]));

        let pending = controller.begin_keyword("[1");
        controller.scan_plugins(&pending);
        controller.activate();
        assert_eq!(host.last_size(), Some((760.0, 376.0)));

        assert!(controller.complete_lookup(LookupCompletion {
            generation: pending.generation,
            result: Ok(vec![]),
        }));

        assert_eq!(controller.mode().plugin_id(), Some("json"));
        assert!(controller.list().is_empty());
        assert_eq!(host.last_size(), Some((760.0, 376.0)));

        // Collapsing sizes the window for the committed list
        controller.focus_changed(false);
        assert_eq!(host.last_size(), Some((760.0, 56.0)));
    }

    #[test]
    fn test_keyword_change_collapses_surface() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, "[]", Ok(vec![]));
        controller.activate();
        assert_eq!(controller.mode().plugin_id(), Some("json"));

        controller.begin_keyword("[1");
        assert!(controller.mode().is_list());
    }

    #[test]
    fn test_surface_keeps_original_keyword() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, "[1]", Ok(vec![]));
        controller.activate();

        controller.move_down();
        controller.move_up();
        match controller.mode() {
            SurfaceMode::PluginSurface { keyword, .. } => assert_eq!(keyword, "[1]"),
            other => panic!("expected plugin surface, got {:?}", other),
        }
    }

    #[test]
    fn test_handle_key_contract() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, "s", Ok(vec![app("Safari"), app("Slack")]));

        let response = controller.handle_key("ArrowDown");
        assert!(response.prevent_default);
        assert_eq!(response.outcome, None);
        assert_eq!(controller.snapshot().selected, Some(1));

        let response = controller.handle_key("ArrowUp");
        assert!(response.prevent_default);
        assert_eq!(controller.snapshot().selected, Some(0));

        let response = controller.handle_key("Tab");
        assert!(response.prevent_default);
        assert_eq!(response.outcome, None);
        assert_eq!(controller.snapshot().selected, Some(0));

        let response = controller.handle_key("Enter");
        assert!(response.prevent_default);
        assert!(matches!(
            response.outcome,
            Some(ActivationOutcome::Launched { .. })
        ));

        let response = controller.handle_key("a");
        assert!(!response.prevent_default);
        assert_eq!(response.outcome, None);
    }

    #[test]
    fn test_handle_key_enter_on_empty_list() {
        let (mut controller, _host) = controller();
        let response = controller.handle_key("Enter");
        assert!(response.prevent_default);
        assert_eq!(response.outcome, Some(ActivationOutcome::NoOp));
    }

    #[test]
    fn test_focus_lost_collapses_and_hides() {
        let (mut controller, host) = controller();
        type_keyword(&mut controller, "[]", Ok(vec![]));
        controller.activate();

        controller.focus_changed(false);
        assert!(controller.mode().is_list());

        let calls = host.calls();
        assert_eq!(calls.last(), Some(&HostCall::Hide));
        assert_eq!(host.last_size(), Some((760.0, 120.0)));
    }

    #[test]
    fn test_focus_gained_centers_then_focuses() {
        let mut host = MockHostShell::new();
        let mut seq = mockall::Sequence::new();
        host.expect_set_position_centered()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_focus_input()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_hide().never();

        let mut controller =
            Controller::new(registry(), Arc::new(host), WindowConfig::default());
        controller.focus_changed(true);
    }

    #[test]
    fn test_focus_lost_in_list_mode_only_hides() {
        let mut host = MockHostShell::new();
        host.expect_hide().times(1).return_const(());
        host.expect_set_size().never();

        let mut controller =
            Controller::new(registry(), Arc::new(host), WindowConfig::default());
        controller.focus_changed(false);
    }

    #[test]
    fn test_empty_braces_open_json_surface() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, "{}", Ok(vec![]));
        assert_eq!(controller.list().entries(), &[ResultEntry::plugin("json", "JSON")]);

        controller.activate();
        match controller.mode() {
            SurfaceMode::PluginSurface {
                plugin_id, keyword, ..
            } => {
                assert_eq!(plugin_id, "json");
                assert_eq!(keyword, "{}");
            }
            other => panic!("expected plugin surface, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_keyword_selects_nothing() {
        let (mut controller, _host) = controller();
        type_keyword(&mut controller, "", Ok(vec![]));

        assert!(controller.list().is_empty());
        assert!(controller.current().is_none());
        assert_eq!(controller.activate(), ActivationOutcome::NoOp);
    }

    #[test]
    fn test_plugins_keep_registration_order() {
        let registry = Arc::new(PluginRegistry::new());
        registry.register(
            "second",
            Arc::new(Prefix {
                prefix: "x",
                height: None,
            }),
        );
        registry.register(
            "first",
            Arc::new(Prefix {
                prefix: "",
                height: None,
            }),
        );
        let host = Arc::new(RecordingHost::new());
        let mut controller = Controller::new(registry, host, WindowConfig::default());

        for _ in 0..3 {
            type_keyword(&mut controller, "x", Ok(vec![]));
            let ids: Vec<_> = controller
                .list()
                .entries()
                .iter()
                .filter_map(|e| e.plugin_id())
                .collect();
            assert_eq!(ids, vec!["second", "first"]);
        }
    }

    #[test]
    fn test_escape_dismisses() {
        let (mut controller, host) = controller();
        type_keyword(&mut controller, "[]", Ok(vec![]));
        controller.activate();

        let response = controller.handle_key("Escape");
        assert!(response.prevent_default);
        assert_eq!(response.outcome, None);
        assert!(controller.mode().is_list());
        assert_eq!(host.calls().last(), Some(&HostCall::Hide));
    }

    #[test]
    fn test_custom_keymap() {
        let host = Arc::new(RecordingHost::new());
        let mut keymap = Keymap::new();
        keymap.set("ctrl+n", Action::CursorDown);
        let mut controller =
            Controller::new(registry(), host, WindowConfig::default()).with_keymap(keymap);
        type_keyword(&mut controller, "s", Ok(vec![app("Safari"), app("Slack")]));

        assert!(!controller.handle_key("ArrowDown").prevent_default);
        assert!(controller.handle_key("ctrl-n").prevent_default);
        assert_eq!(controller.snapshot().selected, Some(1));
    }
}
