/// Shared application state
use std::sync::Arc;
use vinyl_storage::SqliteCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqliteCatalog>,
}

impl AppState {
    pub fn new(db: Arc<SqliteCatalog>) -> Self {
        Self { db }
    }
}
