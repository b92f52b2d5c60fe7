//! Record-type definitions.
//!
//! A record type is a named, ordered list of fields. Plain records declare
//! their fields up front; model-bound records compute them from the bound
//! model each time they are enumerated.

use crate::field::{Field, FieldKind};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    fn next() -> Self {
        Self(NEXT_RECORD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Handle to a record type, used by fields that nest another record.
///
/// Equality and hashing use the record identity only; the name is carried
/// along for rendering.
#[derive(Debug, Clone)]
pub struct RecordRef {
    id: RecordId,
    name: Arc<str>,
}

impl RecordRef {
    /// Returns the identity of the referenced record.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the name of the referenced record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordRef {}

impl Hash for RecordRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Computes the field set of a model-bound record.
///
/// Implementations instantiate the bound model and return the fields it
/// exposes, in declaration order. Any cost or side effect of instantiation
/// belongs to the implementation.
pub trait ModelBinding: Send + Sync {
    /// Instantiates the model and returns its computed fields.
    fn computed_fields(&self) -> Vec<Field>;
}

impl<F> ModelBinding for F
where
    F: Fn() -> Vec<Field> + Send + Sync,
{
    fn computed_fields(&self) -> Vec<Field> {
        self()
    }
}

/// Where a record's fields come from.
#[derive(Clone)]
pub enum FieldSource {
    /// Statically declared fields.
    Declared(Vec<Field>),
    /// Fields computed by instantiating a bound model.
    Computed(Arc<dyn ModelBinding>),
}

impl fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared(fields) => f.debug_tuple("Declared").field(fields).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A named record type.
#[derive(Debug, Clone)]
pub struct RecordType {
    id: RecordId,
    name: Arc<str>,
    source: FieldSource,
}

impl RecordType {
    /// Starts a new record definition with a fresh identity.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> RecordBuilder {
        let name: String = name.into();
        RecordBuilder {
            id: RecordId::next(),
            name: Arc::from(name),
            fields: Vec::new(),
        }
    }

    /// Returns the record identity.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the record name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field source.
    #[must_use]
    pub const fn source(&self) -> &FieldSource {
        &self.source
    }

    /// Returns true if the record computes its fields from a bound model.
    #[must_use]
    pub const fn is_model_bound(&self) -> bool {
        matches!(self.source, FieldSource::Computed(_))
    }

    /// Returns a reference handle to this record.
    #[must_use]
    pub fn reference(&self) -> RecordRef {
        RecordRef {
            id: self.id,
            name: Arc::clone(&self.name),
        }
    }

    /// Enumerates the record's fields in declaration order.
    ///
    /// Model-bound records are instantiated on every call.
    #[must_use]
    pub fn fields(&self) -> Cow<'_, [Field]> {
        match &self.source {
            FieldSource::Declared(fields) => Cow::Borrowed(fields.as_slice()),
            FieldSource::Computed(binding) => Cow::Owned(binding.computed_fields()),
        }
    }
}

/// Builder for [`RecordType`].
///
/// The identity is allocated when the builder is created so fields can
/// reference the record being defined.
#[derive(Debug)]
pub struct RecordBuilder {
    id: RecordId,
    name: Arc<str>,
    fields: Vec<Field>,
}

impl RecordBuilder {
    /// Returns the identity the built record will have.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns a reference handle to the record under construction.
    #[must_use]
    pub fn reference(&self) -> RecordRef {
        RecordRef {
            id: self.id,
            name: Arc::clone(&self.name),
        }
    }

    /// Appends a declared field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        self.fields.push(Field::new(name, kind));
        self
    }

    /// Builds a plain record from the declared fields.
    #[must_use]
    pub fn build(self) -> RecordType {
        RecordType {
            id: self.id,
            name: self.name,
            source: FieldSource::Declared(self.fields),
        }
    }

    /// Builds a model-bound record whose fields come from `binding`.
    ///
    /// Fields declared on the builder are discarded.
    #[must_use]
    pub fn model_bound(self, binding: impl ModelBinding + 'static) -> RecordType {
        RecordType {
            id: self.id,
            name: self.name,
            source: FieldSource::Computed(Arc::new(binding)),
        }
    }
}
