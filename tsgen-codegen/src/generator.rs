//! Main code generator.

use crate::error::CodegenError;
use crate::typescript::InterfaceRenderer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tsgen_schema::{DEFAULT_CONTEXT, Registry};

/// TypeScript generator for one context of a registry.
pub struct Generator<'a> {
    registry: &'a Registry,
    context: String,
}

impl<'a> Generator<'a> {
    /// Creates a generator for [`DEFAULT_CONTEXT`].
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            context: DEFAULT_CONTEXT.to_string(),
        }
    }

    /// Sets the context to generate.
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Returns the context this generator reads from.
    #[must_use]
    pub fn context_name(&self) -> &str {
        &self.context
    }

    /// Generates the interfaces of every record in the context, in
    /// registration order.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the context was never registered.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let records = self.registry.list_types(&self.context)?;
        let renderer = InterfaceRenderer::new(self.registry, &self.context);

        let mut output = String::new();
        for record in records {
            output.push_str(&renderer.render(record));
        }

        Ok(output)
    }

    /// Generates the interfaces and writes them to `sink` in one write.
    ///
    /// # Errors
    /// Returns `CodegenError` if the context is unknown or the write fails.
    /// Nothing is written on a lookup failure.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<usize, CodegenError> {
        let output = self.generate()?;
        sink.write_all(output.as_bytes())?;
        sink.flush()?;
        Ok(output.len())
    }

    /// Generates the interfaces and writes them to the file at `path`,
    /// creating or truncating it.
    ///
    /// # Errors
    /// Returns `CodegenError` if the context is unknown or the file cannot be
    /// written. The file is not touched on a lookup failure.
    pub fn write_file(&self, path: &Path) -> Result<(), CodegenError> {
        let output = self.generate()?;
        let mut file = File::create(path)?;
        file.write_all(output.as_bytes())?;

        tracing::info!(
            "Wrote {} bytes of interfaces for context '{}' to {}",
            output.len(),
            self.context,
            path.display()
        );
        Ok(())
    }
}
