//! # odata-edm
//!
//! Schema registry and metadata resolution core for OData CSDL documents:
//! a namespace-aware symbol table over one or more metadata documents, with
//! lazy cross-document reference resolution, aliasing, operation overload
//! sets, and derived operation metadata.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! registry  → SchemaRegistry, reference resolution, ReferenceResolver
//!   ↓
//! edm       → derived views: OperationMetadata, BindingTarget, EdmError
//!   ↓
//! csdl      → declaration model: Schema, types, containers, operations
//!   ↓
//! base      → naming primitives (FullQualifiedName, AliasInfo)
//! ```
//!
//! Parsing metadata documents into [`csdl`] declarations, URI handling, and
//! the I/O behind [`registry::ReferenceResolver`] are the host's concern;
//! this crate is a pure in-memory metadata graph.

// ============================================================================
// MODULES (dependency order: base → csdl → edm → registry)
// ============================================================================

/// Naming primitives: FullQualifiedName, AliasInfo
pub mod base;

/// Declaration model for CSDL schemas, containers, and operations
pub mod csdl;

/// Derived metadata views and error types
pub mod edm;

/// The schema registry and reference resolution
pub mod registry;

// Re-export the types virtually every caller touches
pub use base::{AliasInfo, FullQualifiedName};
pub use edm::{BindingTarget, EdmError, EdmResult, OperationMetadata};
pub use registry::{EntityContainerInfo, ReferenceResolver, SchemaRegistry};
