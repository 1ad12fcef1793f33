//! # Derived metadata layer
//!
//! Resolved views over [`crate::csdl`] declarations:
//! - [`OperationMetadata`] - memoized parameter/return-type view of one
//!   action or function, with bound-receiver and result-entity-set queries
//! - [`BindingTarget`] - an entity set or singleton with its owning
//!   container, used to chase entity-set paths
//! - [`EdmError`] - the fatal metadata error classes

mod binding_target;
mod error;
mod operation;

pub use binding_target::BindingTarget;
pub use error::{EdmError, EdmResult};
pub use operation::OperationMetadata;

#[cfg(test)]
mod tests;
