//! # tsgen Codegen
//!
//! TypeScript interface generation from registered record types.
//!
//! This crate provides:
//! - Field type resolution (scalars, arrays and same-context references)
//! - One `export interface` block per record type
//! - Whole-context generation to a string, a writer or a file

pub mod error;
pub mod generator;
pub mod typescript;

pub use error::CodegenError;
pub use generator::Generator;

use std::path::Path;
use tsgen_schema::Registry;

/// Generates the interfaces of `context` and writes them to `output_path`,
/// creating or truncating the file.
///
/// # Arguments
/// * `registry` - Registry holding the record types
/// * `output_path` - File to write
/// * `context` - Context to generate (usually [`tsgen_schema::DEFAULT_CONTEXT`])
///
/// # Errors
/// Returns `CodegenError` if the context was never registered or the file
/// cannot be written.
pub fn generate_ts(
    registry: &Registry,
    output_path: impl AsRef<Path>,
    context: &str,
) -> Result<(), CodegenError> {
    Generator::new(registry)
        .context(context)
        .write_file(output_path.as_ref())
}

/// Generates the interfaces of `context` as a string.
///
/// # Errors
/// Returns `CodegenError` if the context was never registered.
pub fn generate_string(registry: &Registry, context: &str) -> Result<String, CodegenError> {
    Generator::new(registry).context(context).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_schema::{DEFAULT_CONTEXT, FieldKind, RecordType, ScalarKind};

    #[test]
    fn test_generate_ts_writes_file() {
        let mut registry = Registry::new();
        let tag = registry.declare(
            "internal",
            RecordType::builder("Tag")
                .field("label", ScalarKind::Slug)
                .build(),
        );
        registry.declare(
            "internal",
            RecordType::builder("Post")
                .field("title", ScalarKind::Char)
                .field("published", ScalarKind::Date)
                .field("tags", FieldKind::array_of(&*tag))
                .build(),
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("internal.ts");
        generate_ts(&registry, &path, "internal").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, generate_string(&registry, "internal").unwrap());
        assert!(written.contains("    tags: Tag[];\n"));
        assert!(written.contains("    published: Date;\n"));
    }

    #[test]
    fn test_generate_string_default_context_missing() {
        let registry = Registry::new();
        let err = generate_string(&registry, DEFAULT_CONTEXT).unwrap_err();
        assert!(err.is_lookup());
    }
}
