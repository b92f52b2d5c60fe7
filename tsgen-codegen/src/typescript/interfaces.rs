//! Interface block rendering.

use crate::typescript::fields::FieldResolver;
use tsgen_schema::{RecordType, Registry};

/// Renders one `export interface` block per record type.
pub struct InterfaceRenderer<'a> {
    resolver: FieldResolver<'a>,
}

impl<'a> InterfaceRenderer<'a> {
    /// Creates a new interface renderer.
    #[must_use]
    pub fn new(registry: &'a Registry, context: &'a str) -> Self {
        Self {
            resolver: FieldResolver::new(registry, context),
        }
    }

    /// Renders the interface block for `record`.
    ///
    /// The block ends with a blank line so consecutive blocks can be
    /// concatenated directly. Names are emitted verbatim.
    #[must_use]
    pub fn render(&self, record: &RecordType) -> String {
        tracing::debug!("Creating interface for {}", record.name());

        let lines: Vec<String> = record
            .fields()
            .iter()
            .map(|field| {
                let resolved = self.resolver.resolve(field);
                format!("    {}: {};", resolved.name, resolved.ts_type)
            })
            .collect();

        format!(
            "export interface {} {{\n{}\n}}\n\n",
            record.name(),
            lines.join("\n")
        )
    }
}
