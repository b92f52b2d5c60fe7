//! Static mapping from scalar field kinds to TypeScript type names.

use crate::field::ScalarKind;

/// Target type used for every kind without a table entry.
pub const FALLBACK_TYPE: &str = "any";

/// Suffix appended to the element type of an array field.
pub const ARRAY_SUFFIX: &str = "[]";

impl ScalarKind {
    /// Returns the TypeScript type for this kind, or `None` when the table
    /// has no entry for it.
    #[must_use]
    pub const fn target_type(&self) -> Option<&'static str> {
        match self {
            Self::Boolean | Self::NullBoolean => Some("boolean"),
            Self::Char
            | Self::Email
            | Self::Regex
            | Self::Slug
            | Self::Url
            | Self::Uuid
            | Self::FilePath
            | Self::IpAddress
            | Self::Duration => Some("string"),
            Self::Integer | Self::Float | Self::Decimal => Some("number"),
            Self::DateTime | Self::Date | Self::Time => Some("Date"),
            Self::Dict | Self::HStore | Self::Json => Some("object"),
            Self::Choice
            | Self::MultipleChoice
            | Self::File
            | Self::Image
            | Self::ReadOnly
            | Self::Hidden
            | Self::SerializerMethod
            | Self::Model
            | Self::PrimaryKeyRelated
            | Self::Custom(_) => None,
        }
    }
}

/// Maps a scalar kind to its TypeScript type, degrading to
/// [`FALLBACK_TYPE`] for unmapped kinds.
#[must_use]
pub fn map_kind(kind: &ScalarKind) -> &'static str {
    kind.target_type().unwrap_or(FALLBACK_TYPE)
}
