use std::sync::Arc;

use parking_lot::RwLock;
use personax_core::{Error, Population, Result};
use tracing::info;

use crate::session::SessionStore;

/// Shared application state handed to every REST handler
///
/// The population slot starts empty; the HTTP surface is reachable while
/// the dataset loads and answers 503 until a snapshot is installed.
pub struct AppState {
    population: RwLock<Option<Arc<Population>>>,
    sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            population: RwLock::new(None),
            sessions: SessionStore::new(),
        }
    }

    /// Install a loaded snapshot, replacing any previous one
    pub fn install_population(&self, population: Arc<Population>) {
        info!(persons = population.len(), "population snapshot installed");
        *self.population.write() = Some(population);
    }

    /// Current snapshot, or `NotReady` while loading
    pub fn population(&self) -> Result<Arc<Population>> {
        self.population
            .read()
            .as_ref()
            .cloned()
            .ok_or(Error::NotReady)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.population.read().is_some()
    }

    #[inline]
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
