#![allow(clippy::unwrap_used)]
use super::super::SchemaRegistry;
use crate::base::FullQualifiedName;
use crate::csdl::{
    Annotation, AnnotationGroup, EntityContainer, EntitySet, EntityType, Operation, Schema,
    Singleton, Term, TypeDefinition,
};

fn registry_with_model() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.add_schema(
        Schema::new("org.example")
            .with_alias("ex")
            .with_entity_type(EntityType::new("Customer").with_key(["id"]))
            .with_term(Term::new(
                "Description",
                FullQualifiedName::new("Edm", "String"),
            ))
            .with_type_definition(TypeDefinition::new(
                "Money",
                FullQualifiedName::new("Edm", "Decimal"),
            ))
            .with_action(Operation::action("Reset"))
            .with_action(Operation::action("Reset").bound())
            .with_function(Operation::function("Top")),
    );
    registry
}

#[test]
fn test_entity_type_hit_and_miss() {
    let registry = registry_with_model();
    let hit = registry
        .entity_type(&FullQualifiedName::new("org.example", "Customer"))
        .unwrap();
    assert_eq!(hit.unwrap().name, "Customer");

    let miss = registry
        .entity_type(&FullQualifiedName::new("org.example", "Unknown"))
        .unwrap();
    assert!(miss.is_none());
}

#[test]
fn test_unknown_namespace_is_empty_not_an_error() {
    let registry = registry_with_model();
    let fqn = FullQualifiedName::new("org.missing", "Customer");
    assert!(registry.entity_type(&fqn).unwrap().is_none());
    assert!(registry.complex_type(&fqn).unwrap().is_none());
    assert!(registry.enum_type(&fqn).unwrap().is_none());
    assert!(registry.type_definition(&fqn).unwrap().is_none());
    assert!(registry.term(&fqn).unwrap().is_none());
    assert!(registry.actions(&fqn).unwrap().is_empty());
    assert!(registry.functions(&fqn).unwrap().is_empty());
    assert!(registry.entity_container_info(Some(&fqn)).unwrap().is_none());
}

#[test]
fn test_action_overload_set_in_declaration_order() {
    let registry = registry_with_model();
    let overloads = registry
        .actions(&FullQualifiedName::new("org.example", "Reset"))
        .unwrap();
    assert_eq!(overloads.len(), 2);
    assert!(!overloads[0].bound);
    assert!(overloads[1].bound);

    let none = registry
        .actions(&FullQualifiedName::new("org.example", "Missing"))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_lookup_by_local_schema_alias() {
    let registry = registry_with_model();
    let hit = registry
        .entity_type(&FullQualifiedName::new("ex", "Customer"))
        .unwrap();
    assert_eq!(hit.unwrap().name, "Customer");
}

#[test]
fn test_entity_container_first_match_by_add_order() {
    let mut registry = SchemaRegistry::new();
    registry.add_schema(Schema::new("org.first"));
    registry.add_schema(
        Schema::new("org.second").with_entity_container(EntityContainer::new("Second")),
    );
    registry.add_schema(
        Schema::new("org.third").with_entity_container(EntityContainer::new("Third")),
    );

    assert_eq!(registry.entity_container().unwrap().name, "Second");

    let info = registry.entity_container_info(None).unwrap().unwrap();
    assert_eq!(info.container_name, FullQualifiedName::parse("org.second"));
    assert_eq!(info.extends_container, None);
}

#[test]
fn test_entity_container_info_by_full_string() {
    let mut registry = SchemaRegistry::new();
    registry.add_schema(
        Schema::new("org.example").with_entity_container(
            EntityContainer::new("Container").with_extends_container("org.base.Container"),
        ),
    );

    // The container FQN's full string addresses the owning schema.
    let fqn = FullQualifiedName::parse("org.example");
    let info = registry.entity_container_info(Some(&fqn)).unwrap().unwrap();
    assert_eq!(info.container_name, FullQualifiedName::parse("org.example"));
    assert_eq!(
        info.extends_container,
        Some(FullQualifiedName::parse("org.base.Container"))
    );
}

#[test]
fn test_container_member_lookups() {
    let mut registry = SchemaRegistry::new();
    let customer = FullQualifiedName::new("org.example", "Customer");
    registry.add_schema(
        Schema::new("org.example").with_entity_container(
            EntityContainer::new("Container")
                .with_entity_set(EntitySet::new("Customers", customer.clone()))
                .with_singleton(Singleton::new("Me", customer)),
        ),
    );

    let container_fqn = FullQualifiedName::parse("org.example");
    assert_eq!(
        registry
            .entity_set(&container_fqn, "Customers")
            .unwrap()
            .unwrap()
            .name,
        "Customers"
    );
    assert_eq!(
        registry
            .singleton(&container_fqn, "Me")
            .unwrap()
            .unwrap()
            .name,
        "Me"
    );
    assert!(registry
        .entity_set(&container_fqn, "Me")
        .unwrap()
        .is_none());
    assert!(registry
        .action_import(&container_fqn, "Nope")
        .unwrap()
        .is_none());
    assert!(registry
        .function_import(&container_fqn, "Nope")
        .unwrap()
        .is_none());
}

#[test]
fn test_alias_infos_lists_local_schemas_in_add_order() {
    let mut registry = SchemaRegistry::new();
    registry.add_schema(Schema::new("org.one").with_alias("one"));
    registry.add_schema(Schema::new("org.plain"));
    registry.add_schema(Schema::new("org.two").with_alias("two"));

    let infos = registry.alias_infos();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].alias, "one");
    assert_eq!(infos[0].namespace, "org.one");
    assert_eq!(infos[1].alias, "two");
}

#[test]
fn test_annotations_group_by_target_fqn() {
    let mut registry = registry_with_model();
    registry.add_schema(
        Schema::new("org.vocab").with_annotation_group(
            AnnotationGroup::new("Customer")
                .with_qualifier("Tablet")
                .with_annotation(Annotation::new("Core.Description").with_value("customer")),
        ),
    );

    let target = FullQualifiedName::new("org.vocab", "Customer");
    let group = registry
        .annotations_group(&target, Some("Tablet"))
        .unwrap()
        .unwrap();
    assert_eq!(group.annotations.len(), 1);

    let qualifier_miss = registry.annotations_group(&target, None).unwrap();
    assert!(qualifier_miss.is_none());
}

#[test]
fn test_base_uri_normalized_to_single_trailing_separator() {
    let mut registry = SchemaRegistry::new();
    registry.set_base_uri("http://example.org/metadata");
    assert_eq!(registry.base_uri(), Some("http://example.org/metadata/"));

    registry.set_base_uri("http://example.org/metadata///");
    assert_eq!(registry.base_uri(), Some("http://example.org/metadata/"));
}
