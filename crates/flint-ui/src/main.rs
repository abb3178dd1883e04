//! Flint - headless command palette host.
//!
//! Loads config and plugins, builds the application index backend, and runs
//! the launcher loop. Input is read line by line from stdin; the palette is
//! printed to stdout after every change.

use std::io::BufRead;
use std::sync::Arc;

use flint_core::{init_lua_path, AppConfig};
use flint_index::AppIndex;
use flint_plugin_api::{load_init_lua, register_builtins, register_flint_api, PluginRegistry, Surface};
use flint_ui::backend::RuntimeBackend;
use flint_ui::host::HostShell;
use flint_ui::keymap::Keymap;
use flint_ui::launcher::{Launcher, LauncherEvent, LauncherHandle};
use flint_ui::model::{ControllerSnapshot, SurfaceMode};
use flint_ui::platform::launch_application;
use flint_ui::Controller;
use mlua::Lua;

// =============================================================================
// Terminal Host
// =============================================================================

/// Host shell with no window: geometry requests are logged, launches are real.
struct TerminalHost;

impl HostShell for TerminalHost {
    fn set_size(&self, width: f32, height: f32) {
        tracing::info!("host: resize to {}x{}", width, height);
    }

    fn set_position_centered(&self) {
        tracing::info!("host: center");
    }

    fn hide(&self) {
        tracing::info!("host: hide");
    }

    fn focus_input(&self) {
        tracing::info!("host: focus input");
    }

    fn launch(&self, path: &str) {
        if let Err(e) = launch_application(path) {
            tracing::error!("{}", e);
        }
    }
}

// =============================================================================
// Input
// =============================================================================

/// Translate one stdin line into a launcher event.
fn command_to_event(line: &str) -> LauncherEvent {
    match line.trim_end_matches(['\r', '\n']) {
        ":down" => LauncherEvent::Key("ArrowDown".to_string()),
        ":up" => LauncherEvent::Key("ArrowUp".to_string()),
        ":enter" => LauncherEvent::Key("Enter".to_string()),
        ":tab" => LauncherEvent::Key("Tab".to_string()),
        ":esc" => LauncherEvent::Key("Escape".to_string()),
        ":blur" => LauncherEvent::FocusChanged(false),
        ":focus" => LauncherEvent::FocusChanged(true),
        ":quit" => LauncherEvent::Shutdown,
        keyword => LauncherEvent::KeywordChanged(keyword.to_string()),
    }
}

/// Forward stdin to the launcher on a dedicated thread.
fn spawn_stdin_reader(handle: LauncherHandle) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            };
            if !handle.send(command_to_event(&line)) {
                return;
            }
        }
        handle.shutdown();
    });
}

// =============================================================================
// Output
// =============================================================================

/// Render a snapshot as plain text.
fn render_snapshot(snapshot: &ControllerSnapshot) -> String {
    let mut out = format!("> {}\n", snapshot.keyword);

    match &snapshot.mode {
        SurfaceMode::List => {
            for (i, entry) in snapshot.entries.iter().enumerate() {
                let marker = if snapshot.selected == Some(i) { '*' } else { ' ' };
                let kind = if entry.is_application() { "app" } else { "plugin" };
                out.push_str(&format!("{} {} [{}]\n", marker, entry.title(), kind));
            }
        }
        SurfaceMode::PluginSurface {
            plugin_id, surface, ..
        } => {
            out.push_str(&format!("-- {} --\n", plugin_id));
            match surface {
                Surface::Empty => {}
                Surface::Text(body) | Surface::Preformatted(body) => {
                    out.push_str(body);
                    out.push('\n');
                }
                Surface::Error(message) => out.push_str(&format!("(error: {})\n", message)),
            }
        }
    }
    out
}

// =============================================================================
// Initialization
// =============================================================================

/// Build the plugin registry: built-ins first, then init.lua.
///
/// The returned `Lua` must outlive the registry; Lua plugins call into it.
fn create_registry() -> Result<(Arc<PluginRegistry>, Lua), String> {
    let registry = Arc::new(PluginRegistry::new());
    register_builtins(&registry);

    let lua = Lua::new();
    register_flint_api(&lua, registry.clone())
        .map_err(|e| format!("Failed to register Lua API: {}", e))?;

    match init_lua_path().filter(|path| path.exists()) {
        Some(path) => {
            tracing::info!("Loading plugins from: {}", path.display());
            if let Err(e) = load_init_lua(&lua, &path) {
                tracing::error!("init.lua error: {} - continuing with built-in plugins", e);
            }
        }
        None => tracing::info!("No init.lua found - using built-in plugins"),
    }

    tracing::info!("Plugins: {}", registry.ids().join(", "));
    Ok((registry, lua))
}

fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {} - using defaults", e);
            AppConfig::default()
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Flint starting...");

    let config = load_config();

    let (registry, _lua) = match create_registry() {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Failed to create plugin registry: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut keymap = Keymap::with_defaults();
    keymap.apply_overrides(&config.keymap);

    let index = Arc::new(AppIndex::from_config(&config.index));
    let backend = Arc::new(RuntimeBackend::new(index).with_timeout(config.index.timeout()));

    let controller = Controller::new(registry, Arc::new(TerminalHost), config.window.clone())
        .with_keymap(keymap);
    let launcher = Launcher::new(controller, backend);

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let mut snapshots = launcher.subscribe();
    spawn_stdin_reader(launcher.handle());

    rt.block_on(async move {
        tokio::spawn(async move {
            while snapshots.changed().await.is_ok() {
                let text = render_snapshot(&snapshots.borrow_and_update());
                print!("{}", text);
            }
        });
        launcher.run().await;
    });
}
