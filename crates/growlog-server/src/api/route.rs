//! Route assembly.
//!
//! Fixed routes are registered before the generic record routes so
//! `/run_select_query/` never resolves as a record segment.

use actix_web::web;

use super::{health, query, records};

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(health::status)
        .service(query::run_select_query)
        .service(records::read_one)
        .service(records::read_all)
        .service(records::upsert)
        .service(records::remove);
}
