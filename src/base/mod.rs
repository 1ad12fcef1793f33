//! Foundation types for the EDM metadata graph.
//!
//! This module provides the naming primitives used throughout the crate:
//! - [`FullQualifiedName`] - namespace-qualified element names
//! - [`AliasInfo`] - alias/namespace pairs reported by the registry
//!
//! This module has NO dependencies on other odata-edm modules.

mod alias_info;
mod fqn;

pub use alias_info::AliasInfo;
pub use fqn::FullQualifiedName;
