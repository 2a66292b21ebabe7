//! Error types for metadata symbol-table construction.

use thiserror::Error;

/// Errors that can occur while building the metadata symbol table.
///
/// Construction is all-or-nothing: every variant here aborts the whole
/// parse, and no partially built table is ever exposed. Absence of a symbol
/// on lookup is *not* an error; the `*_by_name` accessors return `Option`
/// so callers can treat unresolved names as a normal outcome.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The metadata document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Missing required element or attribute (e.g. a `Function` without a
    /// `ReturnType` child).
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Two same-kind symbols in one schema collide on exact or
    /// case-insensitive name.
    #[error("Duplicate {kind} '{name}' in schema '{namespace}'")]
    DuplicateSymbol {
        kind: &'static str,
        name: String,
        namespace: String,
    },

    /// Two schemas in one document declare the same namespace.
    #[error("Duplicate schema namespace: '{0}'")]
    DuplicateNamespace(String),

    /// A type reference was declared with an empty string.
    #[error("Type construction requires a non-empty string")]
    EmptyTypeName,

    /// A `Collection(...)` wrapper whose closing parenthesis is missing or
    /// not the final character.
    #[error("Malformed type name: {0}")]
    MalformedTypeName(String),

    /// The document declared no schemas, so there is no default schema.
    #[error("Metadata document declares no schemas")]
    NoSchemas,
}

impl MetadataError {
    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            name: name.into(),
        }
    }

    /// Create a duplicate symbol error.
    pub fn duplicate(
        kind: &'static str,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self::DuplicateSymbol {
            kind,
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}
