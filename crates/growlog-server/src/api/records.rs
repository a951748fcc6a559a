//! Generic record routes.
//!
//! One set of handlers serves every record type. The first path segment
//! selects a registry descriptor and the store dispatches to the matching
//! entity; nothing here is specific to any one table.

use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, web};
use serde_json::Value;

use growlog_persistence::{payload, registry, store};

use crate::{error, model::app_state::AppState};

#[get("/{record}/{key}")]
pub(crate) async fn read_one(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (segment, raw_key) = path.into_inner();
    let Some(descriptor) = registry::lookup(&segment) else {
        return error::unknown_record(&segment, req.path());
    };
    let Ok(key) = raw_key.trim().parse::<i32>() else {
        return error::bad_request(
            format!("{} key must be an integer", descriptor.display_name),
            req.path(),
        );
    };

    // Key 0 is the "read everything" form of the route.
    if key == 0 {
        return match store::fetch_all(data.db(), descriptor).await {
            Ok(rows) => HttpResponse::Ok().json(rows),
            Err(err) => error::store_error(err, req.path()),
        };
    }

    match store::fetch_one(data.db(), descriptor, key).await {
        Ok(row) => HttpResponse::Ok().json(row),
        Err(err) => error::store_error(err, req.path()),
    }
}

#[get("/{record}/")]
pub(crate) async fn read_all(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let segment = path.into_inner();
    let Some(descriptor) = registry::lookup(&segment) else {
        return error::unknown_record(&segment, req.path());
    };

    match store::fetch_all(data.db(), descriptor).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => error::store_error(err, req.path()),
    }
}

#[post("/{record}/")]
pub(crate) async fn upsert(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> impl Responder {
    let segment = path.into_inner();
    let Some(descriptor) = registry::lookup(&segment) else {
        return error::unknown_record(&segment, req.path());
    };

    let shaped = match payload::shape(descriptor, &body) {
        Ok(shaped) => shaped,
        Err(err) => return error::payload_error(err, req.path()),
    };

    match store::upsert(data.db(), descriptor, shaped).await {
        Ok(outcome) if outcome.created => HttpResponse::Created().json(outcome.row),
        Ok(outcome) => HttpResponse::Ok().json(outcome.row),
        Err(err) => error::store_error(err, req.path()),
    }
}

#[delete("/{record}/{key}")]
pub(crate) async fn remove(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (segment, raw_key) = path.into_inner();
    let Some(descriptor) = registry::lookup(&segment) else {
        return error::unknown_record(&segment, req.path());
    };
    let Ok(key) = raw_key.trim().parse::<i32>() else {
        return error::bad_request(
            format!("{} key must be an integer", descriptor.display_name),
            req.path(),
        );
    };

    match store::delete(data.db(), descriptor, key).await {
        Ok(row) => HttpResponse::Ok().json(row),
        Err(err) => error::store_error(err, req.path()),
    }
}
