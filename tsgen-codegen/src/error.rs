//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Registry lookup error.
    #[error("schema error: {0}")]
    Schema(#[from] tsgen_schema::SchemaError),

    /// IO error while writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Returns true if generation failed because the context was never
    /// registered.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::Schema(tsgen_schema::SchemaError::ContextNotFound { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_schema::SchemaError;

    #[test]
    fn test_is_lookup() {
        let err: CodegenError = SchemaError::context_not_found("internal").into();
        assert!(err.is_lookup());
        assert_eq!(
            err.to_string(),
            "schema error: context 'internal' has no registered record types"
        );

        let err: CodegenError = std::io::Error::other("disk full").into();
        assert!(!err.is_lookup());
    }
}
