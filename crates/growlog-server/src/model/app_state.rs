//! State shared by every request handler.

use sea_orm::DatabaseConnection;

use super::config::Configuration;

/// Application state shared across all handlers. The connection is a pool
/// handle; cloning it per request hands each handler its own checkout.
#[derive(Clone)]
pub struct AppState {
    pub configuration: Configuration,
    pub database_connection: DatabaseConnection,
}

impl AppState {
    pub fn db(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("database_connection", &"<DatabaseConnection>")
            .finish()
    }
}
