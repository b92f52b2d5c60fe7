//! Prelude module for convenient imports.
//!
//! ```
//! use tsgen::prelude::*;
//! ```

pub use tsgen_schema::{
    DEFAULT_CONTEXT, ElementKind, Field, FieldKind, ModelBinding, RecordRef, RecordType, Registry,
    ScalarKind,
};

pub use tsgen_codegen::{CodegenError, Generator, generate_string, generate_ts};
