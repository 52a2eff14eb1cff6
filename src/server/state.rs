//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state cloned into every handler through Axum's `State` extractor.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
