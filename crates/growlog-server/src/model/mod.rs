//! Data models and shared application structures

pub mod app_state;
pub mod config;
pub mod response;
