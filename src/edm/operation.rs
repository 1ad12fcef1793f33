//! Derived, memoized view over one action or function declaration.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;

use super::binding_target::BindingTarget;
use super::error::{EdmError, EdmResult};
use crate::base::FullQualifiedName;
use crate::csdl::{EntitySet, Operation, OperationKind, Parameter, ReturnType};

/// Name-keyed parameter lookup plus the ordered name list, derived once from
/// the declaration's parameter sequence.
#[derive(Debug)]
struct ParameterIndex {
    by_name: IndexMap<String, Arc<Parameter>>,
    names: Vec<String>,
}

/// Wraps one [`Operation`] declaration obtained from the registry.
///
/// The parameter index and return type are derived lazily on first access
/// and memoized; concurrent first accesses race benignly, with one whole
/// value winning. Readers never observe a partially built index.
#[derive(Debug)]
pub struct OperationMetadata {
    operation: Arc<Operation>,
    parameters: OnceLock<ParameterIndex>,
    return_type: OnceLock<Option<ReturnType>>,
}

impl OperationMetadata {
    pub fn new(operation: Arc<Operation>) -> Self {
        Self {
            operation,
            parameters: OnceLock::new(),
            return_type: OnceLock::new(),
        }
    }

    pub fn operation(&self) -> &Arc<Operation> {
        &self.operation
    }

    pub fn name(&self) -> &str {
        &self.operation.name
    }

    pub fn kind(&self) -> OperationKind {
        self.operation.kind
    }

    fn parameter_index(&self) -> &ParameterIndex {
        self.parameters.get_or_init(|| {
            let mut by_name = IndexMap::with_capacity(self.operation.parameters.len());
            let mut names = Vec::with_capacity(self.operation.parameters.len());
            for parameter in &self.operation.parameters {
                by_name.insert(parameter.name.clone(), Arc::clone(parameter));
                names.push(parameter.name.clone());
            }
            ParameterIndex { by_name, names }
        })
    }

    pub fn parameter(&self, name: &str) -> Option<Arc<Parameter>> {
        self.parameter_index().by_name.get(name).cloned()
    }

    /// Parameter names in declaration order; empty (not absent) for a
    /// parameterless operation.
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_index().names
    }

    pub fn return_type(&self) -> Option<&ReturnType> {
        self.return_type
            .get_or_init(|| self.operation.return_type.clone())
            .as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.operation.bound
    }

    pub fn entity_set_path(&self) -> Option<&str> {
        self.operation.entity_set_path.as_deref()
    }

    /// Type of the implicit receiver (first parameter); `None` when unbound.
    pub fn binding_parameter_type_fqn(&self) -> Option<&FullQualifiedName> {
        if !self.is_bound() {
            return None;
        }
        self.operation.parameters.first().map(|p| &p.type_fqn)
    }

    /// Collection-ness of the implicit receiver; `None` when unbound.
    pub fn is_binding_parameter_type_collection(&self) -> Option<bool> {
        if !self.is_bound() {
            return None;
        }
        self.operation.parameters.first().map(|p| p.collection)
    }

    /// Derive the concrete result entity set from the binding target
    /// currently attached to the receiver parameter.
    ///
    /// With no binding target or no declared entity-set path the result is
    /// absent, not an error. A path that fails to resolve, or resolves to a
    /// target that is not an entity set, is a fatal metadata error.
    pub fn returned_entity_set(
        &self,
        binding_parameter_entity_set: Option<&BindingTarget>,
    ) -> EdmResult<Option<EntitySet>> {
        let (Some(binding), Some(path)) = (
            binding_parameter_entity_set,
            self.operation.entity_set_path.as_deref(),
        ) else {
            return Ok(None);
        };

        let related = binding
            .related_binding_target(path)
            .ok_or_else(|| EdmError::unresolvable_entity_set_path(path))?;

        match related.as_entity_set() {
            Some(set) => Ok(Some(set.clone())),
            None => Err(EdmError::invalid_binding_target_kind(related.name())),
        }
    }
}
