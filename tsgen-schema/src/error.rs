//! Error types for the record registry.

use thiserror::Error;

/// Error type for registry lookups.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No record type was ever registered under the context.
    #[error("context '{context}' has no registered record types")]
    ContextNotFound {
        /// Context name.
        context: String,
    },
}

impl SchemaError {
    /// Creates a context-not-found error.
    pub fn context_not_found(context: impl Into<String>) -> Self {
        Self::ContextNotFound {
            context: context.into(),
        }
    }
}
