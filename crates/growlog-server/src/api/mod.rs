//! HTTP API handlers

pub mod health;
pub mod query;
pub mod records;
pub mod route;
