//! Action and function declarations.

use std::sync::Arc;

use crate::base::FullQualifiedName;

/// Whether an [`Operation`] was declared as an action or a function.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Action,
    Function,
}

/// A parameter of an action or function.
///
/// For a bound operation the FIRST parameter is the binding (receiver)
/// parameter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_fqn: FullQualifiedName,
    pub collection: bool,
    pub nullable: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_fqn: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            type_fqn,
            collection: false,
            nullable: true,
        }
    }

    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    pub fn non_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// The declared return type of an action or function.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnType {
    pub type_fqn: FullQualifiedName,
    pub collection: bool,
    pub nullable: bool,
}

impl ReturnType {
    pub fn new(type_fqn: FullQualifiedName) -> Self {
        Self {
            type_fqn,
            collection: false,
            nullable: true,
        }
    }

    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }
}

/// An action or function declaration.
///
/// Multiple declarations in one schema may share a name (overloads); the
/// registry returns overload sets in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub name: String,
    pub bound: bool,
    /// Navigation path expression used to derive the result entity set of a
    /// bound operation from its receiver's binding target.
    pub entity_set_path: Option<String>,
    pub parameters: Vec<Arc<Parameter>>,
    pub return_type: Option<ReturnType>,
}

impl Operation {
    pub fn action(name: impl Into<String>) -> Self {
        Self::new(OperationKind::Action, name)
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::new(OperationKind::Function, name)
    }

    fn new(kind: OperationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            bound: false,
            entity_set_path: None,
            parameters: Vec::new(),
            return_type: None,
        }
    }

    pub fn bound(mut self) -> Self {
        self.bound = true;
        self
    }

    pub fn with_entity_set_path(mut self, path: impl Into<String>) -> Self {
        self.entity_set_path = Some(path.into());
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(Arc::new(parameter));
        self
    }

    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = Some(return_type);
        self
    }
}
