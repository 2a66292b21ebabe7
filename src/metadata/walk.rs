//! Per-element parsing of the EDM body.
//!
//! Each function takes the node it is responsible for plus the in-progress
//! [`Schema`], threaded explicitly so no ambient "current schema" state
//! exists. Attribute reads follow the document contract: a missing
//! attribute yields the empty string.

use roxmltree::Node;

use crate::edm::{
    ComplexType, EdmFunction, EdmType, EntityContainer, EntitySet, EntityType, Key,
    NavigationProperty, NavigationPropertyBinding, OnDeleteAction, Parameter, Property,
    ReferentialConstraint,
};
use crate::error::MetadataError;
use crate::schema::Schema;

/// EDM body namespace, covering `Schema` and everything below it.
pub(super) const EDM_NS: &str = "http://docs.oasis-open.org/odata/ns/edm";

fn attr(node: Node, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

fn bool_attr(node: Node, name: &str, default: bool) -> bool {
    node.attribute(name).map_or(default, |v| v == "true")
}

fn edm_children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.has_tag_name((EDM_NS, name)))
}

/// Build one [`Schema`] from a `Schema` element. Child kinds are parsed in
/// a fixed order: entity containers, complex types, functions, entity
/// types.
pub(super) fn parse_schema(schema_node: Node) -> Result<Schema, MetadataError> {
    let mut schema = Schema::new(attr(schema_node, "Namespace"));
    parse_entity_containers(schema_node, &mut schema)?;
    parse_complex_types(schema_node, &mut schema)?;
    parse_functions(schema_node, &mut schema)?;
    parse_entity_types(schema_node, &mut schema)?;
    Ok(schema)
}

fn parse_entity_containers(schema_node: Node, schema: &mut Schema) -> Result<(), MetadataError> {
    for container_node in edm_children(schema_node, "EntityContainer") {
        let entity_set_imports = parse_entity_sets(container_node, schema)?;
        schema.add_entity_container(EntityContainer {
            name: attr(container_node, "Name"),
            entity_set_imports,
        });
    }
    Ok(())
}

/// Entity sets register in the schema index and are also returned for the
/// declaring container to keep.
fn parse_entity_sets(
    container_node: Node,
    schema: &mut Schema,
) -> Result<Vec<EntitySet>, MetadataError> {
    let mut entity_sets = Vec::new();
    for node in edm_children(container_node, "EntitySet") {
        let entity_set = EntitySet {
            schema_namespace: schema.namespace().to_string(),
            name: attr(node, "Name"),
            entity_type: attr(node, "EntityType"),
            navigation_property_bindings: parse_navigation_property_bindings(node),
        };
        tracing::trace!("entity set {}", entity_set.name);
        schema.add_entity_set(entity_set.clone())?;
        entity_sets.push(entity_set);
    }
    Ok(entity_sets)
}

fn parse_navigation_property_bindings(entity_set_node: Node) -> Vec<NavigationPropertyBinding> {
    edm_children(entity_set_node, "NavigationPropertyBinding")
        .map(|node| NavigationPropertyBinding {
            path: attr(node, "Path"),
            target: attr(node, "Target"),
        })
        .collect()
}

fn parse_complex_types(schema_node: Node, schema: &mut Schema) -> Result<(), MetadataError> {
    for node in edm_children(schema_node, "ComplexType") {
        let complex_type = ComplexType {
            schema_namespace: schema.namespace().to_string(),
            name: attr(node, "Name"),
            properties: parse_properties(node)?,
        };
        tracing::trace!("complex type {}", complex_type.name);
        schema.add_complex_type(complex_type)?;
    }
    Ok(())
}

fn parse_functions(schema_node: Node, schema: &mut Schema) -> Result<(), MetadataError> {
    for node in edm_children(schema_node, "Function") {
        let function = EdmFunction {
            schema_namespace: schema.namespace().to_string(),
            name: attr(node, "Name"),
            is_bound: bool_attr(node, "IsBound", false),
            return_type: parse_return_type(node)?,
            parameters: parse_parameters(node)?,
        };
        tracing::trace!("function {}", function.name);
        schema.add_function(function)?;
    }
    Ok(())
}

/// The `ReturnType` child is mandatory; its absence is a structural
/// failure that aborts the whole parse.
fn parse_return_type(function_node: Node) -> Result<EdmType, MetadataError> {
    let node = edm_children(function_node, "ReturnType")
        .next()
        .ok_or_else(|| MetadataError::missing_element("ReturnType"))?;
    EdmType::parse(&attr(node, "Type"))
}

fn parse_parameters(function_node: Node) -> Result<Vec<Parameter>, MetadataError> {
    let mut parameters = Vec::new();
    for node in edm_children(function_node, "Parameter") {
        parameters.push(Parameter {
            name: attr(node, "Name"),
            ty: EdmType::parse(&attr(node, "Type"))?,
        });
    }
    Ok(parameters)
}

fn parse_entity_types(schema_node: Node, schema: &mut Schema) -> Result<(), MetadataError> {
    for node in edm_children(schema_node, "EntityType") {
        let entity_type = EntityType {
            schema_namespace: schema.namespace().to_string(),
            name: attr(node, "Name"),
            key: parse_key(node),
            properties: parse_properties(node)?,
            navigation_properties: parse_navigation_properties(node)?,
        };
        tracing::trace!("entity type {}", entity_type.name);
        schema.add_entity_type(entity_type)?;
    }
    Ok(())
}

fn parse_key(entity_type_node: Node) -> Option<Key> {
    edm_children(entity_type_node, "Key")
        .next()
        .map(|key_node| Key {
            property_refs: edm_children(key_node, "PropertyRef")
                .map(|node| attr(node, "Name"))
                .collect(),
        })
}

fn parse_properties(node: Node) -> Result<Vec<Property>, MetadataError> {
    let mut properties = Vec::new();
    for property_node in edm_children(node, "Property") {
        properties.push(Property {
            name: attr(property_node, "Name"),
            ty: EdmType::parse(&attr(property_node, "Type"))?,
            nullable: bool_attr(property_node, "Nullable", true),
        });
    }
    Ok(properties)
}

fn parse_navigation_properties(
    entity_type_node: Node,
) -> Result<Vec<NavigationProperty>, MetadataError> {
    let mut navigation_properties = Vec::new();
    for node in edm_children(entity_type_node, "NavigationProperty") {
        navigation_properties.push(NavigationProperty {
            name: attr(node, "Name"),
            ty: EdmType::parse(&attr(node, "Type"))?,
            nullable: bool_attr(node, "Nullable", true),
            contains_target: bool_attr(node, "ContainsTarget", false),
            partner: attr(node, "Partner"),
            referential_constraints: parse_referential_constraints(node),
            on_delete: parse_on_delete(node),
        });
    }
    Ok(navigation_properties)
}

fn parse_referential_constraints(navigation_property_node: Node) -> Vec<ReferentialConstraint> {
    edm_children(navigation_property_node, "ReferentialConstraint")
        .map(|node| ReferentialConstraint {
            property: attr(node, "Property"),
            referenced_property: attr(node, "ReferencedProperty"),
        })
        .collect()
}

fn parse_on_delete(navigation_property_node: Node) -> Option<OnDeleteAction> {
    edm_children(navigation_property_node, "OnDelete")
        .next()
        .and_then(|node| OnDeleteAction::from_name(node.attribute("Action").unwrap_or_default()))
}
