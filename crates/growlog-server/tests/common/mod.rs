//! Common test utilities for the HTTP API tests.
//!
//! Each test builds the full application (API key middleware, shared state,
//! every route) over a fresh in-memory SQLite database migrated to the
//! current schema.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    App, Error,
    body::{BoxBody, EitherBody},
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    test::TestRequest,
    web,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use growlog_migration::{Migrator, MigratorTrait};
use growlog_server::{
    api,
    middleware::auth::ApiKeyAuth,
    model::{app_state::AppState, config::Configuration},
};

/// Key the test configuration expects in the `x-api-key` header.
pub const TEST_API_KEY: &str = "test-key";

/// Fresh database with the full schema applied.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // One connection so every statement sees the same in-memory database
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.expect("test database");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

pub fn test_configuration() -> Configuration {
    let config = config::Config::builder()
        .set_override("auth.key", TEST_API_KEY)
        .unwrap()
        .build()
        .unwrap();
    Configuration { config }
}

pub async fn state() -> Arc<AppState> {
    Arc::new(AppState {
        configuration: test_configuration(),
        database_connection: test_db().await,
    })
}

/// The application as the server builds it, without the listener or the
/// request logger.
pub fn app(
    app_state: Arc<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(ApiKeyAuth)
        .app_data(web::Data::from(app_state))
        .configure(api::route::register)
}

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get()
        .uri(uri)
        .insert_header(("x-api-key", TEST_API_KEY))
}

pub fn post(uri: &str) -> TestRequest {
    TestRequest::post()
        .uri(uri)
        .insert_header(("x-api-key", TEST_API_KEY))
}

pub fn post_json(uri: &str, body: serde_json::Value) -> TestRequest {
    post(uri).set_json(body)
}

pub fn delete(uri: &str) -> TestRequest {
    TestRequest::delete()
        .uri(uri)
        .insert_header(("x-api-key", TEST_API_KEY))
}

/// Percent-encode a statement into the gateway's query parameter.
pub fn select_query_uri(sql: &str) -> String {
    let mut encoded = String::new();
    for byte in sql.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("/run_select_query/?query={encoded}")
}
