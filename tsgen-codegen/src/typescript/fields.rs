//! Field type resolution.

use tsgen_schema::{ARRAY_SUFFIX, ElementKind, FALLBACK_TYPE, Field, Registry, map_kind};

/// A field with its TypeScript type resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Field name, verbatim.
    pub name: String,
    /// TypeScript type, including the array suffix for array fields.
    pub ts_type: String,
    /// Whether the field is an array.
    pub is_array: bool,
}

/// Resolves field kinds to TypeScript types within one context.
///
/// A record element resolves to the record's name only when that exact
/// record is registered in the same context; otherwise it falls through to
/// the mapping table like any other unmapped kind.
pub struct FieldResolver<'a> {
    registry: &'a Registry,
    context: &'a str,
}

impl<'a> FieldResolver<'a> {
    /// Creates a new field resolver.
    #[must_use]
    pub fn new(registry: &'a Registry, context: &'a str) -> Self {
        Self { registry, context }
    }

    /// Resolves a single field.
    #[must_use]
    pub fn resolve(&self, field: &Field) -> ResolvedField {
        let is_array = field.kind.is_array();
        let mut ts_type = self.resolve_element(field.kind.element());
        if is_array {
            ts_type.push_str(ARRAY_SUFFIX);
        }

        ResolvedField {
            name: field.name.clone(),
            ts_type,
            is_array,
        }
    }

    /// Resolves an element kind, ignoring array-ness.
    #[must_use]
    pub fn resolve_element(&self, element: &ElementKind) -> String {
        match element {
            ElementKind::Record(r) if self.registry.contains(self.context, r.id()) => {
                r.name().to_string()
            }
            ElementKind::Record(r) => {
                tracing::debug!(
                    "Record '{}' is not registered in context '{}', falling back",
                    r.name(),
                    self.context
                );
                FALLBACK_TYPE.to_string()
            }
            ElementKind::Scalar(kind) => map_kind(kind).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_schema::{DEFAULT_CONTEXT, FieldKind, RecordType, ScalarKind};

    fn foo() -> RecordType {
        RecordType::builder("Foo")
            .field("id", ScalarKind::Integer)
            .build()
    }

    #[test]
    fn test_resolve_scalar() {
        let registry = Registry::new();
        let resolver = FieldResolver::new(&registry, DEFAULT_CONTEXT);

        let resolved = resolver.resolve(&Field::new("id", ScalarKind::Integer));
        assert_eq!(resolved.name, "id");
        assert_eq!(resolved.ts_type, "number");
        assert!(!resolved.is_array);
    }

    #[test]
    fn test_resolve_unmapped_scalar_is_any() {
        let registry = Registry::new();
        let resolver = FieldResolver::new(&registry, DEFAULT_CONTEXT);

        for kind in [
            ScalarKind::Choice,
            ScalarKind::SerializerMethod,
            ScalarKind::Custom("GeometryField".to_string()),
        ] {
            assert_eq!(resolver.resolve(&Field::new("x", kind)).ts_type, "any");
        }
    }

    #[test]
    fn test_resolve_array_appends_suffix_to_element() {
        let mut registry = Registry::new();
        let foo = registry.declare_default(foo());
        let resolver = FieldResolver::new(&registry, DEFAULT_CONTEXT);

        for element in [
            ElementKind::from(ScalarKind::Char),
            ElementKind::from(ScalarKind::Image),
            ElementKind::from(&*foo),
        ] {
            let resolved = resolver.resolve(&Field::new("xs", FieldKind::array_of(element.clone())));
            assert!(resolved.is_array);
            assert_eq!(
                resolved.ts_type,
                format!("{}[]", resolver.resolve_element(&element))
            );
        }
    }

    #[test]
    fn test_resolve_same_context_reference() {
        let mut registry = Registry::new();
        let foo = registry.declare_default(foo());
        let resolver = FieldResolver::new(&registry, DEFAULT_CONTEXT);

        let resolved = resolver.resolve(&Field::new("foo", FieldKind::single(&*foo)));
        assert_eq!(resolved.ts_type, "Foo");
    }

    #[test]
    fn test_resolve_cross_context_reference_is_any() {
        let mut registry = Registry::new();
        let foo = registry.declare("other", foo());
        registry.declare_default(RecordType::builder("Bar").build());
        let resolver = FieldResolver::new(&registry, DEFAULT_CONTEXT);

        let single = resolver.resolve(&Field::new("foo", FieldKind::single(&*foo)));
        assert_eq!(single.ts_type, "any");

        let many = resolver.resolve(&Field::new("foos", FieldKind::array_of(&*foo)));
        assert_eq!(many.ts_type, "any[]");
    }

    #[test]
    fn test_resolve_reference_by_identity_not_name() {
        let mut registry = Registry::new();
        registry.declare_default(foo());
        let unregistered_foo = foo();
        let resolver = FieldResolver::new(&registry, DEFAULT_CONTEXT);

        let resolved = resolver.resolve(&Field::new(
            "foo",
            FieldKind::single(&unregistered_foo),
        ));
        assert_eq!(resolved.ts_type, "any");
    }
}
