//! Field descriptors.
//!
//! A field is a `(name, kind)` pair. The kind is either a single element or
//! an array of elements, and an element is either a scalar kind of the
//! serializer framework or a reference to another record type.

use crate::record::{RecordRef, RecordType};

/// Scalar field kinds of the serializer framework.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `BooleanField`.
    Boolean,
    /// `NullBooleanField`.
    NullBoolean,
    /// `CharField`.
    Char,
    /// `EmailField`.
    Email,
    /// `RegexField`.
    Regex,
    /// `SlugField`.
    Slug,
    /// `URLField`.
    Url,
    /// `UUIDField`.
    Uuid,
    /// `FilePathField`.
    FilePath,
    /// `IPAddressField`.
    IpAddress,
    /// `IntegerField`.
    Integer,
    /// `FloatField`.
    Float,
    /// `DecimalField`.
    Decimal,
    /// `DateTimeField`.
    DateTime,
    /// `DateField`.
    Date,
    /// `TimeField`.
    Time,
    /// `DurationField`.
    Duration,
    /// `ChoiceField`.
    Choice,
    /// `MultipleChoiceField`.
    MultipleChoice,
    /// `FileField`.
    File,
    /// `ImageField`.
    Image,
    /// `DictField`.
    Dict,
    /// `HStoreField`.
    HStore,
    /// `JSONField`.
    Json,
    /// `ReadOnlyField`.
    ReadOnly,
    /// `HiddenField`.
    Hidden,
    /// `SerializerMethodField`.
    SerializerMethod,
    /// `ModelField`.
    Model,
    /// `PrimaryKeyRelatedField`.
    PrimaryKeyRelated,
    /// Any kind the framework defines that is not listed above.
    Custom(String),
}

impl ScalarKind {
    /// Parses a scalar kind from its framework class name (`"IntegerField"`)
    /// or its short name (`"integer"`).
    ///
    /// Unrecognised names are kept verbatim as [`ScalarKind::Custom`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let short = name.strip_suffix("Field").unwrap_or(name);
        match short.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "boolean" | "bool" => Self::Boolean,
            "nullboolean" => Self::NullBoolean,
            "char" | "string" => Self::Char,
            "email" => Self::Email,
            "regex" => Self::Regex,
            "slug" => Self::Slug,
            "url" => Self::Url,
            "uuid" => Self::Uuid,
            "filepath" => Self::FilePath,
            "ipaddress" => Self::IpAddress,
            "integer" | "int" => Self::Integer,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "datetime" => Self::DateTime,
            "date" => Self::Date,
            "time" => Self::Time,
            "duration" => Self::Duration,
            "choice" => Self::Choice,
            "multiplechoice" => Self::MultipleChoice,
            "file" => Self::File,
            "image" => Self::Image,
            "dict" => Self::Dict,
            "hstore" => Self::HStore,
            "json" => Self::Json,
            "readonly" => Self::ReadOnly,
            "hidden" => Self::Hidden,
            "serializermethod" => Self::SerializerMethod,
            "model" => Self::Model,
            "primarykeyrelated" => Self::PrimaryKeyRelated,
            _ => Self::Custom(name.to_string()),
        }
    }

    /// Returns the framework class name of this kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "BooleanField",
            Self::NullBoolean => "NullBooleanField",
            Self::Char => "CharField",
            Self::Email => "EmailField",
            Self::Regex => "RegexField",
            Self::Slug => "SlugField",
            Self::Url => "URLField",
            Self::Uuid => "UUIDField",
            Self::FilePath => "FilePathField",
            Self::IpAddress => "IPAddressField",
            Self::Integer => "IntegerField",
            Self::Float => "FloatField",
            Self::Decimal => "DecimalField",
            Self::DateTime => "DateTimeField",
            Self::Date => "DateField",
            Self::Time => "TimeField",
            Self::Duration => "DurationField",
            Self::Choice => "ChoiceField",
            Self::MultipleChoice => "MultipleChoiceField",
            Self::File => "FileField",
            Self::Image => "ImageField",
            Self::Dict => "DictField",
            Self::HStore => "HStoreField",
            Self::Json => "JSONField",
            Self::ReadOnly => "ReadOnlyField",
            Self::Hidden => "HiddenField",
            Self::SerializerMethod => "SerializerMethodField",
            Self::Model => "ModelField",
            Self::PrimaryKeyRelated => "PrimaryKeyRelatedField",
            Self::Custom(name) => name,
        }
    }
}

/// The element a field holds: a scalar or a reference to a record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Scalar framework kind.
    Scalar(ScalarKind),
    /// Nested record type.
    Record(RecordRef),
}

impl ElementKind {
    /// Returns the referenced record, if this element is one.
    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Self::Record(r) => Some(r),
            Self::Scalar(_) => None,
        }
    }
}

impl From<ScalarKind> for ElementKind {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl From<RecordRef> for ElementKind {
    fn from(reference: RecordRef) -> Self {
        Self::Record(reference)
    }
}

impl From<&RecordType> for ElementKind {
    fn from(record: &RecordType) -> Self {
        Self::Record(record.reference())
    }
}

/// Declared kind of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single element.
    Single(ElementKind),
    /// An array of elements (`many=True` / list child).
    ArrayOf(ElementKind),
}

impl FieldKind {
    /// Creates a single-element kind.
    #[must_use]
    pub fn single(element: impl Into<ElementKind>) -> Self {
        Self::Single(element.into())
    }

    /// Creates an array-of kind.
    #[must_use]
    pub fn array_of(element: impl Into<ElementKind>) -> Self {
        Self::ArrayOf(element.into())
    }

    /// Returns the element kind, unwrapping one level of array.
    #[must_use]
    pub const fn element(&self) -> &ElementKind {
        match self {
            Self::Single(e) | Self::ArrayOf(e) => e,
        }
    }

    /// Returns true if this is an array kind.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::ArrayOf(_))
    }
}

impl From<ScalarKind> for FieldKind {
    fn from(kind: ScalarKind) -> Self {
        Self::Single(ElementKind::Scalar(kind))
    }
}

impl From<ElementKind> for FieldKind {
    fn from(element: ElementKind) -> Self {
        Self::Single(element)
    }
}

/// A named field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Field name, emitted verbatim.
    pub name: String,
    /// Declared kind.
    pub kind: FieldKind,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
