#![allow(clippy::unwrap_used)]
use std::sync::Arc;

use super::super::BindingTarget;
use crate::base::FullQualifiedName;
use crate::csdl::{EntityContainer, EntitySet, NavigationPropertyBinding, Singleton};

fn container() -> Arc<EntityContainer> {
    let order = FullQualifiedName::new("org.example", "Order");
    Arc::new(
        EntityContainer::new("Container")
            .with_entity_set(
                EntitySet::new("Customers", FullQualifiedName::new("org.example", "Customer"))
                    .with_navigation_binding(NavigationPropertyBinding::new("orders", "Orders")),
            )
            .with_entity_set(EntitySet::new("Orders", order.clone()))
            .with_singleton(Singleton::new("Me", order)),
    )
}

#[test]
fn test_from_container_prefers_entity_sets() {
    let container = container();
    assert!(BindingTarget::from_container("Customers", &container)
        .unwrap()
        .is_entity_set());
    assert!(!BindingTarget::from_container("Me", &container)
        .unwrap()
        .is_entity_set());
    assert!(BindingTarget::from_container("Nope", &container).is_none());
}

#[test]
fn test_related_target_matches_binding_path_exactly() {
    let container = container();
    let customers = BindingTarget::from_container("Customers", &container).unwrap();

    let related = customers.related_binding_target("orders").unwrap();
    assert_eq!(related.name(), "Orders");
}

#[test]
fn test_related_target_strips_binding_parameter_segment() {
    let container = container();
    let customers = BindingTarget::from_container("Customers", &container).unwrap();

    // Entity-set paths spell the receiver parameter first.
    let related = customers.related_binding_target("self/orders").unwrap();
    assert_eq!(related.name(), "Orders");
}

#[test]
fn test_unknown_path_yields_none() {
    let container = container();
    let customers = BindingTarget::from_container("Customers", &container).unwrap();
    assert!(customers.related_binding_target("invoices").is_none());
}
