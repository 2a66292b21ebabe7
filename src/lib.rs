//! # odata-edm
//!
//! Core library for OData EDM metadata parsing and symbol-table
//! construction.
//!
//! An EDM (Entity Data Model) metadata document describes the shape of an
//! OData service: its entity types, complex types, functions, and entity
//! sets, grouped into namespaced schemas. This crate walks such a document
//! once and builds an in-memory, read-only symbol table. Downstream
//! consumers such as a query-string parser or a client code generator use
//! it to resolve identifiers found in OData query strings
//! (`$select=Name`, `$expand=Issue`) against the service's actual schema.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! metadata  → EDMX document walking, MetadataSymbolTable
//!   ↓
//! schema    → per-namespace symbol index, exact + case-insensitive lookup
//!   ↓
//! edm       → data model: type references, properties, entities, functions
//!   ↓
//! error     → MetadataError
//! ```
//!
//! ## Example
//!
//! ```
//! use odata_edm::{MetadataSymbolTable, TypeClass};
//!
//! let xml = r#"
//! <edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
//!   <edmx:DataServices>
//!     <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample">
//!       <EntityType Name="Incident">
//!         <Property Name="Name" Type="Edm.String"/>
//!       </EntityType>
//!     </Schema>
//!   </edmx:DataServices>
//! </edmx:Edmx>"#;
//!
//! let table = MetadataSymbolTable::parse_str(xml)?;
//! let schema = table.default_schema()?;
//! let incident = schema.entity_type_by_name("incident").expect("indexed");
//! assert_eq!(incident.properties[0].ty.type_class, TypeClass::Primitive);
//! # Ok::<(), odata_edm::MetadataError>(())
//! ```

// ============================================================================
// MODULES (dependency order: error → edm → schema → metadata)
// ============================================================================

/// Crate-wide error types
pub mod error;

/// EDM data model: type references, properties, entities, functions, containers
pub mod edm;

/// Per-namespace symbol indexing with case-insensitive lookup
pub mod schema;

/// EDMX document walking and symbol-table construction
pub mod metadata;

// Re-export the public surface
pub use edm::{
    ComplexType, EdmFunction, EdmType, EntityContainer, EntitySet, EntityType, Key,
    NavigationProperty, NavigationPropertyBinding, OnDeleteAction, Parameter, PrimitiveKind,
    Property, ReferentialConstraint, TypeClass,
};
pub use error::MetadataError;
pub use metadata::MetadataSymbolTable;
pub use schema::Schema;
