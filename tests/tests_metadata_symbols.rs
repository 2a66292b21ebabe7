//! End-to-end symbol-table construction over EDMX documents.

#![allow(clippy::unwrap_used)]

use odata_edm::{MetadataError, MetadataSymbolTable, OnDeleteAction, PrimitiveKind, TypeClass};

/// A minimal but complete metadata document for the `Sample` service the
/// query-string tests exercise (`Incident?$select=Name,CreatedDate&$expand=Issue`).
const SAMPLE_EDMX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample">
      <EntityContainer Name="Container">
        <EntitySet Name="Incidents" EntityType="Sample.Incident">
          <NavigationPropertyBinding Path="Issue" Target="Issues"/>
        </EntitySet>
        <EntitySet Name="Issues" EntityType="Sample.Issue"/>
      </EntityContainer>
      <ComplexType Name="Address">
        <Property Name="Street" Type="Edm.String"/>
        <Property Name="City" Type="Edm.String" Nullable="false"/>
      </ComplexType>
      <Function Name="GetRecentIncidents">
        <Parameter Name="since" Type="Edm.DateTimeOffset"/>
        <ReturnType Type="Collection(Sample.Incident)"/>
      </Function>
      <EntityType Name="Incident">
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
        <Property Name="Id" Type="Edm.Guid" Nullable="false"/>
        <Property Name="Name" Type="Edm.String"/>
        <Property Name="CreatedDate" Type="Edm.DateTimeOffset"/>
        <NavigationProperty Name="Issue" Type="Collection(Sample.Issue)" Partner="Incident">
          <ReferentialConstraint Property="IssueId" ReferencedProperty="Id"/>
          <OnDelete Action="Cascade"/>
        </NavigationProperty>
      </EntityType>
      <EntityType Name="Issue">
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
        <Property Name="Id" Type="Edm.Guid" Nullable="false"/>
        <NavigationProperty Name="Incident" Type="Sample.Incident" Nullable="false" Partner="Issue"/>
      </EntityType>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

fn sample_table() -> MetadataSymbolTable {
    MetadataSymbolTable::parse_str(SAMPLE_EDMX).unwrap()
}

#[test]
fn default_schema_is_first_parsed() {
    let table = sample_table();
    assert_eq!(table.default_schema().unwrap().namespace(), "Sample");
    assert_eq!(table.schemas().len(), 1);
}

#[test]
fn entity_type_lookup_ignores_case_and_resolves_property_types() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let incident = schema.entity_type_by_name("incident").unwrap();
    assert_eq!(incident.name, "Incident");
    assert_eq!(incident.schema_namespace, "Sample");
    assert_eq!(incident.properties.len(), 3);

    let name = incident.property_by_name("Name").unwrap();
    assert_eq!(name.ty.type_class, TypeClass::Primitive);
    assert_eq!(name.ty.primitive, Some(PrimitiveKind::String));

    let created = incident.property_by_name("CreatedDate").unwrap();
    assert_eq!(created.ty.type_class, TypeClass::Primitive);
    assert_eq!(created.ty.primitive, Some(PrimitiveKind::DateTimeOffset));
}

#[test]
fn entity_set_lookup_ignores_case_and_keeps_target_unresolved() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let incidents = schema.entity_set_by_name("INCIDENTS").unwrap();
    assert_eq!(incidents.name, "Incidents");
    // Deferred resolution: the entity type stays a raw string.
    assert_eq!(incidents.entity_type, "Sample.Incident");

    let binding = &incidents.navigation_property_bindings[0];
    assert_eq!(binding.path, "Issue");
    assert_eq!(binding.target, "Issues");
}

#[test]
fn collection_navigation_property_resolves_as_reference() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let incident = schema.entity_type_by_name("Incident").unwrap();
    let issue = incident.navigation_property_by_name("Issue").unwrap();
    assert!(issue.ty.is_collection);
    assert_eq!(issue.ty.type_class, TypeClass::Reference);
    assert_eq!(issue.ty.name, "Issue");
    assert_eq!(issue.ty.namespace, "Sample");
    assert_eq!(issue.partner, "Incident");
}

#[test]
fn referential_constraints_and_on_delete_survive_parsing() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let incident = schema.entity_type_by_name("Incident").unwrap();
    let issue = incident.navigation_property_by_name("Issue").unwrap();

    assert_eq!(issue.referential_constraints.len(), 1);
    assert_eq!(issue.referential_constraints[0].property, "IssueId");
    assert_eq!(issue.referential_constraints[0].referenced_property, "Id");
    assert_eq!(issue.on_delete, Some(OnDeleteAction::Cascade));

    // The inverse side declares neither.
    let issue_type = schema.entity_type_by_name("Issue").unwrap();
    let inverse = issue_type.navigation_property_by_name("Incident").unwrap();
    assert!(inverse.referential_constraints.is_empty());
    assert_eq!(inverse.on_delete, None);
    assert!(!inverse.ty.is_collection);
    assert!(!inverse.nullable);
}

#[test]
fn key_and_nullability_are_parsed() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let incident = schema.entity_type_by_name("Incident").unwrap();
    let key = incident.key.as_ref().unwrap();
    assert_eq!(key.property_refs, vec!["Id".to_string()]);

    // Nullable="false" is honored; an absent attribute defaults to true.
    assert!(!incident.property_by_name("Id").unwrap().nullable);
    assert!(incident.property_by_name("Name").unwrap().nullable);
}

#[test]
fn function_return_type_and_parameters() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let function = schema.function_by_name("getrecentincidents").unwrap();
    assert_eq!(function.name, "GetRecentIncidents");
    assert!(!function.is_bound);
    assert!(function.return_type.is_collection);
    assert_eq!(function.return_type.type_class, TypeClass::Reference);
    assert_eq!(function.return_type.full_name, "Sample.Incident");

    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].name, "since");
    assert_eq!(
        function.parameters[0].ty.primitive,
        Some(PrimitiveKind::DateTimeOffset)
    );
}

#[test]
fn complex_type_lookup_and_properties() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let address = schema.complex_type_by_name("address").unwrap();
    assert_eq!(address.name, "Address");
    assert!(!address.property_by_name("City").unwrap().nullable);
}

#[test]
fn containers_keep_their_entity_sets_in_order() {
    let table = sample_table();
    let schema = table.default_schema().unwrap();

    let containers = schema.entity_containers();
    assert_eq!(containers.len(), 1);
    assert_eq!(containers[0].name, "Container");

    let names: Vec<&str> = containers[0]
        .entity_set_imports
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Incidents", "Issues"]);
}

#[test]
fn multiple_schemas_are_looked_up_by_namespace() {
    let xml = r#"
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample">
      <EntityType Name="Incident"/>
    </Schema>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Billing">
      <EntityType Name="Invoice"/>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

    let table = MetadataSymbolTable::parse_str(xml).unwrap();
    assert_eq!(table.schemas().len(), 2);
    assert_eq!(table.default_schema().unwrap().namespace(), "Sample");

    let billing = table.schema_by_name("Billing").unwrap();
    assert!(billing.entity_type_by_name("invoice").is_some());
    assert!(billing.entity_type_by_name("incident").is_none());
    assert!(table.schema_by_name("Missing").is_none());
}

#[test]
fn function_without_return_type_aborts_the_parse() {
    let xml = r#"
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample">
      <Function Name="Broken">
        <Parameter Name="p" Type="Edm.Int32"/>
      </Function>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

    let err = MetadataSymbolTable::parse_str(xml).unwrap_err();
    match err {
        MetadataError::Missing { name, .. } => assert_eq!(name, "ReturnType"),
        other => panic!("expected Missing, got {other:?}"),
    }
}

#[test]
fn case_colliding_entity_types_abort_the_parse() {
    let xml = r#"
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample">
      <EntityType Name="Order"/>
      <EntityType Name="order"/>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

    let err = MetadataSymbolTable::parse_str(xml).unwrap_err();
    assert!(matches!(err, MetadataError::DuplicateSymbol { .. }));
}

#[test]
fn duplicate_namespaces_abort_the_parse() {
    let xml = r#"
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample"/>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample"/>
  </edmx:DataServices>
</edmx:Edmx>"#;

    let err = MetadataSymbolTable::parse_str(xml).unwrap_err();
    assert!(matches!(err, MetadataError::DuplicateNamespace(ns) if ns == "Sample"));
}

#[test]
fn empty_property_type_aborts_the_parse() {
    let xml = r#"
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sample">
      <EntityType Name="Incident">
        <Property Name="Name"/>
      </EntityType>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

    let err = MetadataSymbolTable::parse_str(xml).unwrap_err();
    assert!(matches!(err, MetadataError::EmptyTypeName));
}

#[test]
fn document_without_schemas_has_no_default_schema() {
    let xml = r#"
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices/>
</edmx:Edmx>"#;

    let table = MetadataSymbolTable::parse_str(xml).unwrap();
    assert!(table.schemas().is_empty());
    assert!(matches!(
        table.default_schema(),
        Err(MetadataError::NoSchemas)
    ));
}

#[test]
fn schema_outside_the_edm_namespace_is_ignored() {
    // Fixed namespace URIs are part of the document contract; an element
    // merely named Schema does not participate.
    let xml = r#"
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="urn:not-edm" Namespace="Sample"/>
  </edmx:DataServices>
</edmx:Edmx>"#;

    let table = MetadataSymbolTable::parse_str(xml).unwrap();
    assert!(table.schemas().is_empty());
}

#[test]
fn non_edmx_root_is_rejected() {
    let err = MetadataSymbolTable::parse_str(r#"<Edmx Version="4.0"/>"#).unwrap_err();
    assert!(matches!(err, MetadataError::Missing { .. }));
}

#[test]
fn ill_formed_xml_is_an_xml_error() {
    let err = MetadataSymbolTable::parse_str("<edmx:Edmx").unwrap_err();
    assert!(matches!(err, MetadataError::Xml(_)));
}
