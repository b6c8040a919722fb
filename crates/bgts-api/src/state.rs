//! # Application State
//!
//! Shared state for the Axum application: the injected gift store, the
//! penalty register, and the users/agencies directory.

use std::sync::Arc;

use bgts_store::{Directory, GiftStore, MemoryStore, PenaltyRegister};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Declaration storage. Injected so deployments can choose the
    /// in-memory or file-backed implementation without touching handlers.
    pub gifts: Arc<dyn GiftStore>,
    /// Register of levied fines.
    pub penalties: Arc<PenaltyRegister>,
    /// Users and agencies known to the service.
    pub directory: Arc<Directory>,
}

impl AppState {
    /// In-memory state with empty register and directory. The default
    /// for tests and development serving.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// State over an injected gift store.
    pub fn with_store(gifts: Arc<dyn GiftStore>) -> Self {
        Self {
            gifts,
            penalties: Arc::new(PenaltyRegister::new()),
            directory: Arc::new(Directory::default()),
        }
    }

    /// Replace the penalty register.
    pub fn with_penalties(mut self, penalties: PenaltyRegister) -> Self {
        self.penalties = Arc::new(penalties);
        self
    }

    /// Replace the directory.
    pub fn with_directory(mut self, directory: Directory) -> Self {
        self.directory = Arc::new(directory);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("penalties", &self.penalties.len())
            .field("users", &self.directory.users.len())
            .finish_non_exhaustive()
    }
}
