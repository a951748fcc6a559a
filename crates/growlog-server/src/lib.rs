//! Growlog Server - HTTP API for the breeding record set
//!
//! Routes are generic over the record registry: one set of handlers serves
//! every record type, plus the root status page and the guarded ad hoc
//! SELECT route. Every route except the root requires the shared API key.

pub mod api;
pub mod error;
pub mod middleware;
pub mod model;
pub mod startup;
