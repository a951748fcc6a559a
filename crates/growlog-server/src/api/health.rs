//! Unauthenticated status endpoint at the root path.

use actix_web::{HttpResponse, Responder, get, web};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde::Serialize;

use crate::model::app_state::AppState;

const UP: &str = "UP";
const DOWN: &str = "DOWN";

/// Body of `GET /`: who we are, which build, and whether the database
/// answers a trivial probe.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub database: DatabaseProbe,
}

/// Outcome of the `SELECT 1` probe against the configured database.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseProbe {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

async fn probe_database(db: &DatabaseConnection) -> DatabaseProbe {
    let outcome = db.execute_unprepared("SELECT 1").await;
    DatabaseProbe {
        status: if outcome.is_ok() { UP } else { DOWN },
        message: outcome.err().map(|e| e.to_string()),
    }
}

#[get("/")]
pub(crate) async fn status(data: web::Data<AppState>) -> impl Responder {
    let database = probe_database(data.db()).await;
    let healthy = database.status == UP;

    let report = StatusReport {
        service: "growlog",
        version: env!("CARGO_PKG_VERSION"),
        status: if healthy { UP } else { DOWN },
        database,
    };

    if healthy {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
