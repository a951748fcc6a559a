use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use serde::Deserialize;

use growlog_persistence::select_guard;

use crate::{error, model::app_state::AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct QueryParam {
    query: String,
}

/// Validated pass-through for ad hoc SELECT statements.
#[post("/run_select_query/")]
pub(crate) async fn run_select_query(
    req: HttpRequest,
    data: web::Data<AppState>,
    params: web::Query<QueryParam>,
) -> impl Responder {
    match select_guard::run_select(data.db(), &params.query).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => error::gateway_error(err, req.path()),
    }
}
