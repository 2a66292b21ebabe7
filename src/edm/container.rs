//! Entity containers and the entity sets they declare.

/// A named, queryable collection of instances of one EntityType, declared
/// inside an EntityContainer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
    pub schema_namespace: String,
    pub name: String,
    /// The namespace-qualified name of the set's EntityType, kept as the
    /// raw string. Resolving it to the actual EntityType runs against the
    /// finished namespace map in a later phase.
    pub entity_type: String,
    pub navigation_property_bindings: Vec<NavigationPropertyBinding>,
}

/// Binds a navigation-property path on this set's entity type to the
/// target entity set that holds the related entities. Both sides are raw
/// strings pending the later resolution phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPropertyBinding {
    pub path: String,
    pub target: String,
}

/// Groups the entity sets a schema exposes. Containers are kept as a plain
/// ordered list on the schema; only their entity sets are indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityContainer {
    pub name: String,
    pub entity_set_imports: Vec<EntitySet>,
}
