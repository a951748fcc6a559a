//! HTTP server setup.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, middleware::auth::ApiKeyAuth, model::app_state::AppState};

/// Creates and binds the HTTP server.
pub fn http_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(ApiKeyAuth)
            .app_data(web::Data::from(app_state.clone()))
            .configure(api::route::register)
    })
    .bind((address, port))?
    .run())
}
