//! Error types for metadata resolution.

use thiserror::Error;

pub type EdmResult<T> = Result<T, EdmError>;

/// Errors raised while combining metadata declarations.
///
/// Lookups that simply find nothing are NOT errors; they return `None` or an
/// empty overload set. These variants cover metadata-consistency violations
/// and reference-resolution failures, both of which are fatal to the
/// triggering lookup.
#[derive(Debug, Error)]
pub enum EdmError {
    /// A bound operation's entity-set path found no related binding target.
    #[error("Cannot find entity set with path: {path}")]
    UnresolvableEntitySetPath { path: String },

    /// The entity-set path resolved, but to a target that is not an entity
    /// set (e.g. a singleton).
    #[error("Binding target with name '{name}' must be an entity set")]
    InvalidBindingTargetKind { name: String },

    /// Reference-of-reference resolution exceeded the recursion bound, which
    /// only happens when reference documents form a cycle.
    #[error("Circular reference while resolving namespace '{namespace}'")]
    CircularReference { namespace: String },

    /// The reference resolver collaborator failed to produce a registry.
    #[error("Failed to resolve reference '{uri}': {message}")]
    ReferenceResolution { uri: String, message: String },

    /// A reference needed resolving, but the registry was built without a
    /// resolver collaborator.
    #[error("No reference resolver configured; cannot resolve '{uri}'")]
    NoReferenceResolver { uri: String },
}

impl EdmError {
    /// Create an unresolvable entity-set-path error.
    pub fn unresolvable_entity_set_path(path: impl Into<String>) -> Self {
        Self::UnresolvableEntitySetPath { path: path.into() }
    }

    /// Create an invalid binding-target-kind error.
    pub fn invalid_binding_target_kind(name: impl Into<String>) -> Self {
        Self::InvalidBindingTargetKind { name: name.into() }
    }

    /// Create a circular-reference error.
    pub fn circular_reference(namespace: impl Into<String>) -> Self {
        Self::CircularReference {
            namespace: namespace.into(),
        }
    }

    /// Create a reference-resolution failure.
    pub fn reference_resolution(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReferenceResolution {
            uri: uri.into(),
            message: message.into(),
        }
    }
}
