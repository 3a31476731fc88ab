//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::model::slide::ListMode;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a handle to a connection pool
/// (clones share the pool) and `ListMode` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Handlers pass a reference into the service they construct; each query checks a
    /// connection out of the pool and returns it when the query finishes.
    pub db: DatabaseConnection,

    /// How `GET /api/allslides` is answered.
    pub list_mode: ListMode,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `list_mode` - Listing capability flag from configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, list_mode: ListMode) -> Self {
        Self { db, list_mode }
    }
}
