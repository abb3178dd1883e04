//! Event loop driving the controller.
//!
//! Hosts feed input through a [`LauncherHandle`]; lookups run as spawned
//! tasks and report back through the same channel, so the controller only
//! ever sees one event at a time.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::backend::Backend;
use crate::controller::{Controller, LookupCompletion};
use crate::model::ControllerSnapshot;

// =============================================================================
// Events
// =============================================================================

/// Input to the launcher loop.
#[derive(Debug)]
pub enum LauncherEvent {
    /// The keyword input changed.
    KeywordChanged(String),
    /// A key was pressed in the input.
    Key(String),
    /// The window gained (`true`) or lost (`false`) focus.
    FocusChanged(bool),
    /// A lookup task finished.
    LookupResolved(LookupCompletion),
    /// Stop the loop.
    Shutdown,
}

// =============================================================================
// Handle
// =============================================================================

/// Cloneable sender for feeding the launcher.
///
/// Send methods return false once the loop has stopped.
#[derive(Debug, Clone)]
pub struct LauncherHandle {
    tx: mpsc::UnboundedSender<LauncherEvent>,
}

impl LauncherHandle {
    pub fn send(&self, event: LauncherEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn keyword_changed(&self, keyword: impl Into<String>) -> bool {
        self.send(LauncherEvent::KeywordChanged(keyword.into()))
    }

    pub fn key(&self, key: impl Into<String>) -> bool {
        self.send(LauncherEvent::Key(key.into()))
    }

    pub fn focus_changed(&self, focused: bool) -> bool {
        self.send(LauncherEvent::FocusChanged(focused))
    }

    pub fn shutdown(&self) -> bool {
        self.send(LauncherEvent::Shutdown)
    }
}

// =============================================================================
// Launcher
// =============================================================================

pub struct Launcher {
    controller: Controller,
    backend: Arc<dyn Backend>,
    tx: mpsc::UnboundedSender<LauncherEvent>,
    rx: mpsc::UnboundedReceiver<LauncherEvent>,
    snapshot_tx: watch::Sender<ControllerSnapshot>,
}

impl Launcher {
    pub fn new(controller: Controller, backend: Arc<dyn Backend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = watch::channel(controller.snapshot());

        Self {
            controller,
            backend,
            tx,
            rx,
            snapshot_tx,
        }
    }

    pub fn handle(&self) -> LauncherHandle {
        LauncherHandle {
            tx: self.tx.clone(),
        }
    }

    /// Subscribe to controller snapshots. Clone the receiver for each subscriber.
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Process events until [`LauncherEvent::Shutdown`].
    ///
    /// Must be called inside a tokio runtime; lookups are spawned onto it.
    pub async fn run(mut self) {
        tracing::info!("Launcher started");
        while let Some(event) = self.rx.recv().await {
            if !self.handle_event(event) {
                break;
            }
            self.publish();
        }
        tracing::info!("Launcher stopped");
    }

    /// Apply one event. Returns false when the loop should stop.
    fn handle_event(&mut self, event: LauncherEvent) -> bool {
        match event {
            LauncherEvent::KeywordChanged(keyword) => self.start_merge(keyword),
            LauncherEvent::Key(key) => {
                let response = self.controller.handle_key(&key);
                if let Some(outcome) = response.outcome {
                    tracing::info!("Activation: {:?}", outcome);
                }
            }
            LauncherEvent::FocusChanged(focused) => {
                self.controller.focus_changed(focused);
                if focused {
                    self.refresh_index();
                }
            }
            LauncherEvent::LookupResolved(completion) => {
                self.controller.complete_lookup(completion);
            }
            LauncherEvent::Shutdown => return false,
        }
        true
    }

    fn start_merge(&mut self, keyword: String) {
        let request = self.controller.begin_keyword(keyword);

        let search = self.backend.search(request.keyword.clone());
        let tx = self.tx.clone();
        let generation = request.generation;
        tokio::spawn(async move {
            let result = search.await;
            // The loop may already be gone
            let _ = tx.send(LauncherEvent::LookupResolved(LookupCompletion {
                generation,
                result,
            }));
        });

        self.controller.scan_plugins(&request);
    }

    /// Rescan in the background so apps installed since the last show appear.
    fn refresh_index(&self) {
        let refresh = self.backend.refresh();
        tokio::spawn(async move {
            match refresh.await {
                Ok(count) => tracing::debug!("Index refreshed: {} entries", count),
                Err(e) => tracing::warn!("Index refresh failed: {}", e),
            }
        });
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.controller.snapshot());
    }
}

// =============================================================================
// Tests
// =============================================================================
