//! Context-partitioned registry of record types.
//!
//! Each context holds its records in registration order. Contexts never
//! merge: every lookup is scoped to exactly one of them.

use crate::error::SchemaError;
use crate::record::{RecordId, RecordType};
use std::collections::HashMap;
use std::sync::Arc;

/// Context used when none is given.
pub const DEFAULT_CONTEXT: &str = "default";

/// Registry of record types, keyed by context name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    contexts: HashMap<String, Vec<Arc<RecordType>>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to `context`, creating the context on first use.
    ///
    /// Records are not deduplicated; registering two records with the same
    /// name renders both.
    pub fn register(&mut self, context: &str, record: Arc<RecordType>) {
        let records = self.contexts.entry(context.to_string()).or_default();
        if records.iter().any(|r| r.name() == record.name()) {
            tracing::warn!(
                "Record '{}' is already registered in context '{}'",
                record.name(),
                context
            );
        }
        tracing::debug!("Registering '{}' in context '{}'", record.name(), context);
        records.push(record);
    }

    /// Registers `record` in `context` and hands it back for further use.
    pub fn declare(&mut self, context: &str, record: RecordType) -> Arc<RecordType> {
        let record = Arc::new(record);
        self.register(context, Arc::clone(&record));
        record
    }

    /// Registers `record` in [`DEFAULT_CONTEXT`] and hands it back.
    pub fn declare_default(&mut self, record: RecordType) -> Arc<RecordType> {
        self.declare(DEFAULT_CONTEXT, record)
    }

    /// Returns the records of `context` in registration order.
    ///
    /// # Errors
    /// Returns `SchemaError::ContextNotFound` if nothing was ever registered
    /// under `context`.
    pub fn list_types(&self, context: &str) -> Result<&[Arc<RecordType>], SchemaError> {
        self.contexts
            .get(context)
            .map(Vec::as_slice)
            .ok_or_else(|| SchemaError::context_not_found(context))
    }

    /// Returns true if the record identified by `id` is registered in
    /// `context`.
    #[must_use]
    pub fn contains(&self, context: &str, id: RecordId) -> bool {
        self.contexts
            .get(context)
            .is_some_and(|records| records.iter().any(|r| r.id() == id))
    }

    /// Returns the names of all registered contexts, in no particular order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    /// Returns the number of registered contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ScalarKind;

    fn record(name: &str) -> RecordType {
        RecordType::builder(name)
            .field("id", ScalarKind::Integer)
            .build()
    }

    #[test]
    fn test_register_keeps_order() {
        let mut registry = Registry::new();
        registry.declare_default(record("B"));
        registry.declare_default(record("A"));
        registry.declare_default(record("C"));

        let names: Vec<_> = registry
            .list_types(DEFAULT_CONTEXT)
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_list_types_unknown_context() {
        let mut registry = Registry::new();
        registry.declare_default(record("Foo"));

        let err = registry.list_types("internal").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::ContextNotFound { ref context } if context == "internal"
        ));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut registry = Registry::new();
        registry.declare_default(record("Foo"));
        registry.declare_default(record("Foo"));
        assert_eq!(registry.list_types(DEFAULT_CONTEXT).unwrap().len(), 2);
    }

    #[test]
    fn test_declare_returns_registered_record() {
        let mut registry = Registry::new();
        let foo = registry.declare("internal", record("Foo"));
        let listed = &registry.list_types("internal").unwrap()[0];
        assert!(Arc::ptr_eq(&foo, listed));
    }

    #[test]
    fn test_contains_is_identity_based() {
        let mut registry = Registry::new();
        let foo = registry.declare_default(record("Foo"));
        let other_foo = record("Foo");

        assert!(registry.contains(DEFAULT_CONTEXT, foo.id()));
        assert!(!registry.contains(DEFAULT_CONTEXT, other_foo.id()));
    }

    #[test]
    fn test_contains_is_context_scoped() {
        let mut registry = Registry::new();
        let foo = registry.declare("other", record("Foo"));
        registry.declare_default(record("Bar"));

        assert!(registry.contains("other", foo.id()));
        assert!(!registry.contains(DEFAULT_CONTEXT, foo.id()));
        assert!(!registry.contains("missing", foo.id()));
    }

    #[test]
    fn test_contexts() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.declare_default(record("Foo"));
        registry.declare("internal", record("Bar"));
        registry.declare("internal", record("Baz"));

        let mut contexts: Vec<_> = registry.contexts().collect();
        contexts.sort_unstable();
        assert_eq!(contexts, ["default", "internal"]);
        assert_eq!(registry.len(), 2);
    }
}
