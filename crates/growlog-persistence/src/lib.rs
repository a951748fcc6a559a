//! Growlog Persistence - Database entities and record store
//!
//! This crate provides:
//! - SeaORM entity definitions for the breeding record tables
//! - The static record registry describing every record type
//! - Payload shaping against a record's field schema
//! - A generic store engine (read / upsert / guarded delete)
//! - The read-only pass-through for ad hoc SELECT queries

pub mod entity;
pub mod payload;
pub mod registry;
pub mod select_guard;
pub mod store;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;

// Re-export registry types
pub use registry::{FieldDef, FieldKind, RecordDescriptor, ReferencedBy};

// Re-export store surface
pub use store::{StoreError, Upserted};
