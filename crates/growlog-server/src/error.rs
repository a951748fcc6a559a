//! Maps persistence failures onto HTTP error responses.
//!
//! Missing rows and unknown record types are 404s, refused deletes are
//! 409s, bad payloads and rejected queries are 400s. Anything else is a
//! storage fault: logged with detail, returned as an opaque 500.

use actix_web::{HttpResponse, http::StatusCode};
use growlog_persistence::StoreError;
use growlog_persistence::payload::PayloadError;
use growlog_persistence::select_guard::GatewayError;

use crate::model::response::ErrorResult;

pub fn bad_request(message: String, path: &str) -> HttpResponse {
    ErrorResult::http_response(StatusCode::BAD_REQUEST, message, path)
}

pub fn unknown_record(segment: &str, path: &str) -> HttpResponse {
    ErrorResult::http_response(
        StatusCode::NOT_FOUND,
        format!("unknown record type {segment}"),
        path,
    )
}

pub fn store_error(err: StoreError, path: &str) -> HttpResponse {
    match err {
        StoreError::NotFound(_) | StoreError::UnknownRecord(_) => {
            ErrorResult::http_response(StatusCode::NOT_FOUND, err.to_string(), path)
        }
        StoreError::Referenced { .. } => {
            ErrorResult::http_response(StatusCode::CONFLICT, err.to_string(), path)
        }
        StoreError::UnknownColumn(_) | StoreError::Codec(_) | StoreError::Db(_) => {
            internal(err, path)
        }
    }
}

pub fn payload_error(err: PayloadError, path: &str) -> HttpResponse {
    bad_request(err.to_string(), path)
}

pub fn gateway_error(err: GatewayError, path: &str) -> HttpResponse {
    match err {
        GatewayError::Rejected(rejected) => bad_request(rejected.to_string(), path),
        GatewayError::Db(db_err) => internal(db_err, path),
    }
}

fn internal(err: impl std::fmt::Display, path: &str) -> HttpResponse {
    tracing::error!(error = %err, path = path, "Storage operation failed");
    ErrorResult::http_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_string(),
        path,
    )
}
