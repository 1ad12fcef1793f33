//! # CSDL declaration model
//!
//! Provider-side schema declarations, mirroring the shape of CSDL metadata
//! documents: a [`Schema`] per namespace holding ordered collections of type
//! declarations, operations (with overloads), an optional [`EntityContainer`],
//! annotation groups, and external document [`Reference`]s.
//!
//! Declarations here are plain data. Resolution across namespaces lives in
//! [`crate::registry`]; derived operation views live in [`crate::edm`].

mod annotation;
mod container;
mod operation;
mod reference;
mod schema;
mod types;

pub use annotation::{Annotation, AnnotationGroup};
pub use container::{
    ActionImport, EntityContainer, EntitySet, FunctionImport, NavigationPropertyBinding, Singleton,
};
pub use operation::{Operation, OperationKind, Parameter, ReturnType};
pub use reference::{Reference, ReferenceInclude};
pub use schema::Schema;
pub use types::{
    ComplexType, EntityType, EnumMember, EnumType, NavigationProperty, Property, Term,
    TypeDefinition,
};
