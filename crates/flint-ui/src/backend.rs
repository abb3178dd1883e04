//! External application lookup for the Flint launcher.
//!
//! The `Backend` trait is host-independent and returns futures, so the
//! launcher can spawn lookups and tests can substitute a mock.

use futures::future::BoxFuture;
use flint_core::{Application, LookupError};
use flint_index::AppIndex;
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Backend Trait
// =============================================================================

/// Asynchronous keyword lookup.
///
/// A failed lookup is reported as an error; the controller turns it into an
/// empty application list.
pub trait Backend: Send + Sync {
    /// Applications matching `keyword`, in ranked order.
    fn search(&self, keyword: String) -> BoxFuture<'static, Result<Vec<Application>, LookupError>>;

    /// Rebuild whatever the lookup caches. Returns the number of entries.
    fn refresh(&self) -> BoxFuture<'static, Result<usize, LookupError>>;
}

// =============================================================================
// Runtime Backend
// =============================================================================

/// Backend over the on-disk application index.
///
/// Scans run on tokio's blocking pool and are abandoned after the timeout.
pub struct RuntimeBackend {
    index: Arc<AppIndex>,
    timeout: Duration,
}

impl RuntimeBackend {
    /// Create a new runtime backend.
    pub fn new(index: Arc<AppIndex>) -> Self {
        Self {
            index,
            timeout: Duration::from_secs(5),
        }
    }

    /// Create with a custom timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Backend for RuntimeBackend {
    fn search(&self, keyword: String) -> BoxFuture<'static, Result<Vec<Application>, LookupError>> {
        let index = self.index.clone();
        let timeout = self.timeout;

        Box::pin(async move {
            let task = tokio::task::spawn_blocking(move || index.search(&keyword));
            match tokio::time::timeout(timeout, task).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => Err(LookupError::Channel(e.to_string())),
                Err(_) => Err(LookupError::Timeout { duration: timeout }),
            }
        })
    }

    fn refresh(&self) -> BoxFuture<'static, Result<usize, LookupError>> {
        let index = self.index.clone();

        // Lookups keep using the previous scan until this completes
        Box::pin(async move {
            tokio::task::spawn_blocking(move || index.refresh())
                .await
                .map_err(|e| LookupError::Channel(e.to_string()))?
        })
    }
}

// =============================================================================
// Mock Backend (for testing)
// =============================================================================


// =============================================================================
// Tests
// =============================================================================
