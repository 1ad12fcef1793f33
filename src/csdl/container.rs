//! Entity container declarations: entity sets, singletons, and operation
//! imports.

use crate::base::FullQualifiedName;

/// Binds a navigation property path of a set or singleton to a target
/// entity set in the same container.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationPropertyBinding {
    pub path: String,
    /// Name of the target entity set or singleton.
    pub target: String,
}

impl NavigationPropertyBinding {
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

/// An entity set declaration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EntitySet {
    pub name: String,
    pub type_fqn: FullQualifiedName,
    pub include_in_service_document: bool,
    pub navigation_property_bindings: Vec<NavigationPropertyBinding>,
}

impl EntitySet {
    pub fn new(name: impl Into<String>, type_fqn: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            type_fqn,
            include_in_service_document: true,
            navigation_property_bindings: Vec::new(),
        }
    }

    pub fn with_navigation_binding(mut self, binding: NavigationPropertyBinding) -> Self {
        self.navigation_property_bindings.push(binding);
        self
    }
}

/// A singleton declaration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Singleton {
    pub name: String,
    pub type_fqn: FullQualifiedName,
    pub navigation_property_bindings: Vec<NavigationPropertyBinding>,
}

impl Singleton {
    pub fn new(name: impl Into<String>, type_fqn: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            type_fqn,
            navigation_property_bindings: Vec::new(),
        }
    }

    pub fn with_navigation_binding(mut self, binding: NavigationPropertyBinding) -> Self {
        self.navigation_property_bindings.push(binding);
        self
    }
}

/// An action import exposing an unbound action through the container.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ActionImport {
    pub name: String,
    pub action: FullQualifiedName,
    pub entity_set: Option<String>,
}

impl ActionImport {
    pub fn new(name: impl Into<String>, action: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            action,
            entity_set: None,
        }
    }

    pub fn with_entity_set(mut self, entity_set: impl Into<String>) -> Self {
        self.entity_set = Some(entity_set.into());
        self
    }
}

/// A function import exposing an unbound function through the container.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionImport {
    pub name: String,
    pub function: FullQualifiedName,
    pub entity_set: Option<String>,
    pub include_in_service_document: bool,
}

impl FunctionImport {
    pub fn new(name: impl Into<String>, function: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            function,
            entity_set: None,
            include_in_service_document: false,
        }
    }

    pub fn with_entity_set(mut self, entity_set: impl Into<String>) -> Self {
        self.entity_set = Some(entity_set.into());
        self
    }
}

/// An entity container declaration.
///
/// Member names are unique within each collection; that uniqueness is a data
/// contract of the producing parser, not enforced here.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EntityContainer {
    pub name: String,
    /// Qualified name of an extended container, in `Namespace.Name` form.
    pub extends_container: Option<String>,
    pub entity_sets: Vec<EntitySet>,
    pub singletons: Vec<Singleton>,
    pub action_imports: Vec<ActionImport>,
    pub function_imports: Vec<FunctionImport>,
}

impl EntityContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends_container: None,
            entity_sets: Vec::new(),
            singletons: Vec::new(),
            action_imports: Vec::new(),
            function_imports: Vec::new(),
        }
    }

    pub fn with_extends_container(mut self, extends: impl Into<String>) -> Self {
        self.extends_container = Some(extends.into());
        self
    }

    pub fn with_entity_set(mut self, entity_set: EntitySet) -> Self {
        self.entity_sets.push(entity_set);
        self
    }

    pub fn with_singleton(mut self, singleton: Singleton) -> Self {
        self.singletons.push(singleton);
        self
    }

    pub fn with_action_import(mut self, import: ActionImport) -> Self {
        self.action_imports.push(import);
        self
    }

    pub fn with_function_import(mut self, import: FunctionImport) -> Self {
        self.function_imports.push(import);
        self
    }

    // ============================================================
    // Per-name lookups (scanned by the registry's container surface)
    // ============================================================

    pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.iter().find(|es| es.name == name)
    }

    pub fn singleton(&self, name: &str) -> Option<&Singleton> {
        self.singletons.iter().find(|s| s.name == name)
    }

    pub fn action_import(&self, name: &str) -> Option<&ActionImport> {
        self.action_imports.iter().find(|ai| ai.name == name)
    }

    pub fn function_import(&self, name: &str) -> Option<&FunctionImport> {
        self.function_imports.iter().find(|fi| fi.name == name)
    }
}
