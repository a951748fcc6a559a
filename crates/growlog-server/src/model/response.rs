//! HTTP response types for the Growlog server

use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Error body returned by every failing route.
///
/// Successful routes return the record (or rows) directly; only failures
/// are wrapped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResult {
    pub timestamp: String,
    pub status: i32,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResult {
    pub fn new(status: StatusCode, message: String, path: &str) -> Self {
        ErrorResult {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: status.as_u16() as i32,
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message,
            path: path.to_string(),
        }
    }

    pub fn http_response(status: StatusCode, message: String, path: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorResult::new(status, message, path))
    }
}
