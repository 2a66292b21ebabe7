//! The top-level metadata symbol table.

use roxmltree::Document;
use rustc_hash::FxHashMap;

use crate::error::MetadataError;
use crate::schema::Schema;

use super::walk;

/// EDMX envelope namespace, covering `Edmx` and `DataServices`.
const EDMX_NS: &str = "http://docs.oasis-open.org/odata/ns/edmx";

/// All schemas declared by one metadata document, with namespace-qualified
/// and default-schema lookup.
///
/// Built in a single synchronous pass over the parsed document tree; no
/// I/O happens here. Construction is all-or-nothing (any structural
/// defect or symbol collision aborts it) and the finished table is
/// immutable, so concurrent readers need no further synchronization.
#[derive(Debug)]
pub struct MetadataSymbolTable {
    /// Schemas in document order; the first is the default schema.
    schemas: Vec<Schema>,
    schemas_by_namespace: FxHashMap<String, usize>,
}

impl MetadataSymbolTable {
    /// Parse a metadata document from its XML text.
    pub fn parse_str(xml: &str) -> Result<Self, MetadataError> {
        let document = Document::parse(xml)?;
        Self::from_document(&document)
    }

    /// Build the symbol table from an already-parsed document tree.
    ///
    /// Schema elements are located only at the fixed path
    /// `Edmx → DataServices → Schema`, under the OASIS EDMX and EDM
    /// namespace URIs.
    pub fn from_document(document: &Document) -> Result<Self, MetadataError> {
        let root = document.root_element();
        if !root.has_tag_name((EDMX_NS, "Edmx")) {
            return Err(MetadataError::missing_element("edmx:Edmx"));
        }

        let mut schemas = Vec::new();
        let mut schemas_by_namespace = FxHashMap::default();
        for data_services in root
            .children()
            .filter(|n| n.has_tag_name((EDMX_NS, "DataServices")))
        {
            for schema_node in data_services
                .children()
                .filter(|n| n.has_tag_name((walk::EDM_NS, "Schema")))
            {
                let schema = walk::parse_schema(schema_node)?;
                tracing::debug!(
                    "parsed schema '{}' with {} symbols",
                    schema.namespace(),
                    schema.symbol_count()
                );
                if schemas_by_namespace
                    .insert(schema.namespace().to_string(), schemas.len())
                    .is_some()
                {
                    return Err(MetadataError::DuplicateNamespace(
                        schema.namespace().to_string(),
                    ));
                }
                schemas.push(schema);
            }
        }

        Ok(Self {
            schemas,
            schemas_by_namespace,
        })
    }

    /// Look up a schema by its namespace.
    pub fn schema_by_name(&self, namespace: &str) -> Option<&Schema> {
        let slot = *self.schemas_by_namespace.get(namespace)?;
        self.schemas.get(slot)
    }

    /// The first schema in document order. Fails only when the document
    /// declared no schemas at all.
    pub fn default_schema(&self) -> Result<&Schema, MetadataError> {
        self.schemas.first().ok_or(MetadataError::NoSchemas)
    }

    /// All schemas, in document order.
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }
}
