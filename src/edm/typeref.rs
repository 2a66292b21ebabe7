//! Raw EDM type-string resolution.
//!
//! Every `Type` attribute in a metadata document is one of three shapes:
//! `Edm.<Primitive>`, a namespaced reference like `Sample.Incident`, or a
//! `Collection(...)` wrapper around either. Resolution is purely lexical;
//! no knowledge of other schemas is needed, which is what allows type
//! resolution to interleave with schema parsing instead of requiring a
//! second pass over the whole document (forward references are expected).

use crate::error::MetadataError;

use super::primitive::PrimitiveKind;

const COLLECTION_PREFIX: &str = "Collection(";
const NS_SEPARATOR: char = '.';
const EDM_NAMESPACE: &str = "Edm";

/// Classification of a resolved type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// One of the predefined OData primitive types.
    Primitive,
    /// A reference to an EntityType or ComplexType, or a collection of
    /// either. Whether the referenced type actually exists is not checked
    /// here; that resolution runs against the finished namespace map in a
    /// later phase.
    Reference,
}

/// The resolved shape of one raw EDM type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmType {
    /// True iff the raw string carried a `Collection(...)` wrapper.
    pub is_collection: bool,
    /// The inner name with any collection wrapper stripped.
    pub full_name: String,
    /// All dot-separated segments but the last, rejoined with `.`.
    /// Empty for an unqualified name.
    pub namespace: String,
    /// The last dot-separated segment.
    pub name: String,
    pub type_class: TypeClass,
    /// Populated only when `type_class` is [`TypeClass::Primitive`].
    pub primitive: Option<PrimitiveKind>,
}

impl EdmType {
    /// Resolve a raw type string as it appears in a `Type` attribute.
    ///
    /// An unknown name under the `Edm` namespace is *not* an error: it
    /// degrades to [`TypeClass::Reference`] so primitives added by future
    /// protocol versions do not break the parse. Structural defects do
    /// fail: the empty string, and a `Collection(` wrapper whose closing
    /// parenthesis is missing or not the final character.
    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        if raw.is_empty() {
            return Err(MetadataError::EmptyTypeName);
        }

        let is_collection = raw.starts_with(COLLECTION_PREFIX);
        let full_name = if is_collection {
            let inner = raw[COLLECTION_PREFIX.len()..]
                .strip_suffix(')')
                .ok_or_else(|| MetadataError::MalformedTypeName(raw.to_string()))?;
            if inner.is_empty() || inner.contains(')') {
                return Err(MetadataError::MalformedTypeName(raw.to_string()));
            }
            inner.to_string()
        } else {
            raw.to_string()
        };

        let (namespace, name) = match full_name.rfind(NS_SEPARATOR) {
            Some(dot) => (
                full_name[..dot].to_string(),
                full_name[dot + 1..].to_string(),
            ),
            None => (String::new(), full_name.clone()),
        };

        let primitive = if namespace == EDM_NAMESPACE {
            PrimitiveKind::from_name(&name)
        } else {
            None
        };
        let type_class = if primitive.is_some() {
            TypeClass::Primitive
        } else {
            TypeClass::Reference
        };

        Ok(Self {
            is_collection,
            full_name,
            namespace,
            name,
            type_class,
            primitive,
        })
    }

    /// True when this reference still needs resolution against the
    /// namespace map (i.e. it does not denote a primitive).
    pub fn is_reference(&self) -> bool {
        self.type_class == TypeClass::Reference
    }
}
