//! # tsgen
//!
//! Generate TypeScript interfaces from registered record-type definitions.
//!
//! Record types are registered under named contexts in a [`schema::Registry`].
//! Generating a context renders one `export interface` block per record, in
//! registration order. Fields nesting another record of the same context are
//! typed by that record's name; everything else goes through a static kind
//! mapping table that degrades to `any`.
//!
//! ## Quick Start
//!
//! ```
//! use tsgen::prelude::*;
//!
//! let mut registry = Registry::new();
//! let foo = registry.declare_default(
//!     RecordType::builder("Foo")
//!         .field("id", ScalarKind::Integer)
//!         .build(),
//! );
//! registry.declare_default(
//!     RecordType::builder("Bar")
//!         .field("foo", FieldKind::single(&*foo))
//!         .field("tags", FieldKind::array_of(ScalarKind::Char))
//!         .build(),
//! );
//!
//! let output = Generator::new(&registry).generate()?;
//! assert!(output.contains("    tags: string[];\n"));
//! # Ok::<(), tsgen::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Field and record descriptors, mapping table, registry
//! - [`codegen`] - Field resolution, interface rendering, output

pub mod prelude;

/// Record-type definitions and the registry.
pub mod schema {
    pub use tsgen_schema::*;
}

/// TypeScript code generation.
pub mod codegen {
    pub use tsgen_codegen::*;
}

pub use tsgen_codegen::{generate_string, generate_ts};
