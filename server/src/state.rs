//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::roster::RosterManager;
use crate::store::DocumentStore;

/// State shared by all HTTP handlers.
pub struct AppState {
    roster: RosterManager,
}

impl AppState {
    /// Wraps a roster manager.
    #[must_use]
    pub fn new(roster: RosterManager) -> Self {
        Self { roster }
    }

    /// State over `store` with the system clock.
    #[must_use]
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(RosterManager::new(store))
    }

    /// The roster manager.
    #[must_use]
    pub fn roster(&self) -> &RosterManager {
        &self.roster
    }
}
