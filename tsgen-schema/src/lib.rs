//! # tsgen Schema
//!
//! Record-type definitions and the registry they are collected in.
//!
//! This crate provides:
//! - Field and record-type descriptors (plain and model-bound records)
//! - The static mapping table from scalar field kinds to TypeScript types
//! - The context-partitioned registry consumed by code generation

pub mod error;
pub mod field;
pub mod mapping;
pub mod record;
pub mod registry;

pub use error::SchemaError;
pub use field::{ElementKind, Field, FieldKind, ScalarKind};
pub use mapping::{ARRAY_SUFFIX, FALLBACK_TYPE, map_kind};
pub use record::{FieldSource, ModelBinding, RecordBuilder, RecordId, RecordRef, RecordType};
pub use registry::{DEFAULT_CONTEXT, Registry};
