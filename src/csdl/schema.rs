//! A namespace's set of declared members.

use std::sync::Arc;

use parking_lot::RwLock;

use super::annotation::AnnotationGroup;
use super::container::EntityContainer;
use super::operation::Operation;
use super::types::{ComplexType, EntityType, EnumType, Term, TypeDefinition};

/// All declarations of one namespace.
///
/// Collections keep declaration order; name uniqueness within a member
/// category is a data contract of the producing parser, not enforced here.
/// Actions and functions may share a name (overloads), which is why their
/// lookups return every match.
#[derive(Debug)]
pub struct Schema {
    namespace: String,
    /// Interior-mutable: reference resolution assigns the include's alias
    /// onto the referenced document's schema after the fact (§ reference
    /// resolution in [`crate::registry`]).
    alias: RwLock<Option<String>>,
    entity_types: Vec<Arc<EntityType>>,
    complex_types: Vec<Arc<ComplexType>>,
    enum_types: Vec<Arc<EnumType>>,
    type_definitions: Vec<Arc<TypeDefinition>>,
    terms: Vec<Arc<Term>>,
    actions: Vec<Arc<Operation>>,
    functions: Vec<Arc<Operation>>,
    annotation_groups: Vec<Arc<AnnotationGroup>>,
    entity_container: Option<Arc<EntityContainer>>,
}

impl Schema {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            alias: RwLock::new(None),
            entity_types: Vec::new(),
            complex_types: Vec::new(),
            enum_types: Vec::new(),
            type_definitions: Vec::new(),
            terms: Vec::new(),
            actions: Vec::new(),
            functions: Vec::new(),
            annotation_groups: Vec::new(),
            entity_container: None,
        }
    }

    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        *self.alias.write() = Some(alias.into());
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_types.push(Arc::new(entity_type));
        self
    }

    pub fn with_complex_type(mut self, complex_type: ComplexType) -> Self {
        self.complex_types.push(Arc::new(complex_type));
        self
    }

    pub fn with_enum_type(mut self, enum_type: EnumType) -> Self {
        self.enum_types.push(Arc::new(enum_type));
        self
    }

    pub fn with_type_definition(mut self, type_definition: TypeDefinition) -> Self {
        self.type_definitions.push(Arc::new(type_definition));
        self
    }

    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.push(Arc::new(term));
        self
    }

    pub fn with_action(mut self, action: Operation) -> Self {
        self.actions.push(Arc::new(action));
        self
    }

    pub fn with_function(mut self, function: Operation) -> Self {
        self.functions.push(Arc::new(function));
        self
    }

    pub fn with_annotation_group(mut self, group: AnnotationGroup) -> Self {
        self.annotation_groups.push(Arc::new(group));
        self
    }

    pub fn with_entity_container(mut self, container: EntityContainer) -> Self {
        self.entity_container = Some(Arc::new(container));
        self
    }

    // ============================================================
    // Accessors
    // ============================================================

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn alias(&self) -> Option<String> {
        self.alias.read().clone()
    }

    /// Assign an alias after construction. Used by reference resolution when
    /// an include declares an alias for this schema's namespace.
    pub fn set_alias(&self, alias: impl Into<String>) {
        *self.alias.write() = Some(alias.into());
    }

    pub fn entity_types(&self) -> &[Arc<EntityType>] {
        &self.entity_types
    }

    pub fn complex_types(&self) -> &[Arc<ComplexType>] {
        &self.complex_types
    }

    pub fn enum_types(&self) -> &[Arc<EnumType>] {
        &self.enum_types
    }

    pub fn type_definitions(&self) -> &[Arc<TypeDefinition>] {
        &self.type_definitions
    }

    pub fn terms(&self) -> &[Arc<Term>] {
        &self.terms
    }

    pub fn actions(&self) -> &[Arc<Operation>] {
        &self.actions
    }

    pub fn functions(&self) -> &[Arc<Operation>] {
        &self.functions
    }

    pub fn annotation_groups(&self) -> &[Arc<AnnotationGroup>] {
        &self.annotation_groups
    }

    pub fn entity_container(&self) -> Option<&Arc<EntityContainer>> {
        self.entity_container.as_ref()
    }

    // ============================================================
    // Per-name lookups (scanned by the registry's FQN surface)
    // ============================================================

    pub fn entity_type(&self, name: &str) -> Option<&Arc<EntityType>> {
        self.entity_types.iter().find(|t| t.name == name)
    }

    pub fn complex_type(&self, name: &str) -> Option<&Arc<ComplexType>> {
        self.complex_types.iter().find(|t| t.name == name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&Arc<EnumType>> {
        self.enum_types.iter().find(|t| t.name == name)
    }

    pub fn type_definition(&self, name: &str) -> Option<&Arc<TypeDefinition>> {
        self.type_definitions.iter().find(|t| t.name == name)
    }

    pub fn term(&self, name: &str) -> Option<&Arc<Term>> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// Every action overload sharing `name`, in declaration order.
    pub fn actions_by_name(&self, name: &str) -> Vec<Arc<Operation>> {
        self.actions
            .iter()
            .filter(|op| op.name == name)
            .cloned()
            .collect()
    }

    /// Every function overload sharing `name`, in declaration order.
    pub fn functions_by_name(&self, name: &str) -> Vec<Arc<Operation>> {
        self.functions
            .iter()
            .filter(|op| op.name == name)
            .cloned()
            .collect()
    }

    /// Find the annotation group for a target path, matching the qualifier
    /// exactly (a group without qualifier only matches `None`).
    pub fn annotation_group(
        &self,
        target: &str,
        qualifier: Option<&str>,
    ) -> Option<&Arc<AnnotationGroup>> {
        self.annotation_groups
            .iter()
            .find(|g| g.target == target && g.qualifier.as_deref() == qualifier)
    }
}
