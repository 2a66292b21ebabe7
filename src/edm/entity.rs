//! Structured record types: entity types and complex types.

use super::property::{NavigationProperty, Property};

/// The identity of an EntityType: an ordered list of `PropertyRef` names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub property_refs: Vec<String>,
}

/// A structured record type with identity, declared by exactly one schema.
///
/// The owning schema is recorded by namespace rather than by reference,
/// keeping the symbol graph acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub schema_namespace: String,
    pub name: String,
    pub key: Option<Key>,
    pub properties: Vec<Property>,
    pub navigation_properties: Vec<NavigationProperty>,
}

impl EntityType {
    /// Find a structural property by name, ignoring case. Linear scan;
    /// entity types hold at most a few dozen properties.
    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Find a navigation property by name, ignoring case.
    pub fn navigation_property_by_name(&self, name: &str) -> Option<&NavigationProperty> {
        self.navigation_properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// A structured record type without identity: no Key and no navigation
/// properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    pub schema_namespace: String,
    pub name: String,
    pub properties: Vec<Property>,
}

impl ComplexType {
    /// Find a property by name, ignoring case.
    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
