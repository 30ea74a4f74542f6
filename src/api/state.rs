//! Application state for the Shift Wage Engine API.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::config::ConfigLoader;
use crate::history::HistoryStore;

/// Shared application state.
///
/// The configuration is read-only after startup. The history store is the
/// only mutable resource and is guarded by an async mutex.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    history: Arc<Mutex<HistoryStore>>,
}

impl AppState {
    /// Creates a new application state with an empty history.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_history(config, HistoryStore::new())
    }

    /// Creates a new application state around an existing history.
    pub fn with_history(config: ConfigLoader, history: HistoryStore) -> Self {
        Self {
            config: Arc::new(config),
            history: Arc::new(Mutex::new(history)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Locks the history store.
    pub async fn history(&self) -> MutexGuard<'_, HistoryStore> {
        self.history.lock().await
    }
}
