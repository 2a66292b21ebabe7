//! One namespace's worth of declared symbols.

use crate::edm::{ComplexType, EdmFunction, EntityContainer, EntitySet, EntityType};
use crate::error::MetadataError;

use super::index::NameIndex;

/// A single EDM schema: the symbols one namespace declares, indexed for
/// exact and case-insensitive lookup.
///
/// Entity types, complex types, functions and entity sets are indexed;
/// entity containers are accumulated as a plain ordered list. All
/// registration happens during the construction pass; afterwards a
/// `Schema` is read-only and safe to share across threads.
#[derive(Debug)]
pub struct Schema {
    namespace: String,
    entity_containers: Vec<EntityContainer>,
    entity_sets: NameIndex<EntitySet>,
    entity_types: NameIndex<EntityType>,
    functions: NameIndex<EdmFunction>,
    complex_types: NameIndex<ComplexType>,
}

impl Schema {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entity_containers: Vec::new(),
            entity_sets: NameIndex::new("EntitySet"),
            entity_types: NameIndex::new("EntityType"),
            functions: NameIndex::new("Function"),
            complex_types: NameIndex::new("ComplexType"),
        }
    }

    /// The `Namespace` attribute of the schema element. Unique per
    /// document; empty only for a degenerate schema element that declared
    /// no attributes.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    // ============================================================
    // Registration (construction pass only)
    // ============================================================

    pub fn add_entity_container(&mut self, container: EntityContainer) {
        self.entity_containers.push(container);
    }

    pub fn add_entity_set(&mut self, entity_set: EntitySet) -> Result<(), MetadataError> {
        let name = entity_set.name.clone();
        self.entity_sets.insert(&name, &self.namespace, entity_set)
    }

    pub fn add_entity_type(&mut self, entity_type: EntityType) -> Result<(), MetadataError> {
        let name = entity_type.name.clone();
        self.entity_types.insert(&name, &self.namespace, entity_type)
    }

    pub fn add_function(&mut self, function: EdmFunction) -> Result<(), MetadataError> {
        let name = function.name.clone();
        self.functions.insert(&name, &self.namespace, function)
    }

    pub fn add_complex_type(&mut self, complex_type: ComplexType) -> Result<(), MetadataError> {
        let name = complex_type.name.clone();
        self.complex_types.insert(&name, &self.namespace, complex_type)
    }

    // ============================================================
    // Lookup
    // ============================================================

    /// Gets an EntitySet by name, ignoring case.
    pub fn entity_set_by_name(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.by_name(name)
    }

    /// Gets an EntityType by name, ignoring case.
    pub fn entity_type_by_name(&self, name: &str) -> Option<&EntityType> {
        self.entity_types.by_name(name)
    }

    /// Gets a Function by name, ignoring case.
    pub fn function_by_name(&self, name: &str) -> Option<&EdmFunction> {
        self.functions.by_name(name)
    }

    /// Gets a Function by name, case-sensitive.
    pub fn function_by_name_exact(&self, name: &str) -> Option<&EdmFunction> {
        self.functions.by_name_exact(name)
    }

    /// Gets a ComplexType by name, ignoring case.
    pub fn complex_type_by_name(&self, name: &str) -> Option<&ComplexType> {
        self.complex_types.by_name(name)
    }

    // ============================================================
    // Ordered enumeration (declaration order)
    // ============================================================

    pub fn entity_containers(&self) -> &[EntityContainer] {
        &self.entity_containers
    }

    pub fn entity_sets(&self) -> impl Iterator<Item = &EntitySet> {
        self.entity_sets.iter()
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &EntityType> {
        self.entity_types.iter()
    }

    pub fn functions(&self) -> impl Iterator<Item = &EdmFunction> {
        self.functions.iter()
    }

    pub fn complex_types(&self) -> impl Iterator<Item = &ComplexType> {
        self.complex_types.iter()
    }

    /// Count of indexed symbols across all kinds, for logging.
    pub(crate) fn symbol_count(&self) -> usize {
        self.entity_sets.len()
            + self.entity_types.len()
            + self.functions.len()
            + self.complex_types.len()
    }
}
