//! Main entry point for the Growlog breeding-record server.
//!
//! This file sets up logging, connects to the database, applies pending
//! migrations, and starts the HTTP server.

use std::sync::Arc;

use growlog_migration::{Migrator, MigratorTrait};
use growlog_server::{
    model::{app_state::AppState, config::Configuration},
    startup,
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    // Extract configuration parameters
    let address = configuration.server_address();
    let port = configuration.server_port();

    if configuration.api_key().is_empty() {
        tracing::warn!(
            "No API key configured; all record routes will reject requests. \
             Set auth.key or GROWLOG_API_KEY."
        );
    }

    // Connect and bring the schema up to date before accepting requests
    let database_connection = configuration.database_connection().await?;
    Migrator::up(&database_connection, None).await?;
    info!("Database schema is up to date");

    // Create application state
    let app_state = Arc::new(AppState {
        configuration,
        database_connection,
    });

    info!(address = %address, port, "Starting HTTP server");
    startup::http_server(app_state, address, port)?.await?;

    info!("Growlog server shutdown complete");
    Ok(())
}
