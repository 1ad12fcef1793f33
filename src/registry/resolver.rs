//! The reference-resolver collaborator contract.

use std::sync::Arc;

use super::SchemaRegistry;
use crate::edm::EdmResult;

/// Turns a reference URI into a fully populated registry for the referenced
/// metadata document.
///
/// Implementations own the I/O and parsing (network, file system, test
/// fixtures); they may block, and cancellation or timeouts are their
/// responsibility. The registry never inspects a returned child beyond
/// issuing further schema lookups on it, so re-resolving the same URI must
/// yield equivalent schema content.
pub trait ReferenceResolver: Send + Sync {
    fn resolve_reference(
        &self,
        uri: &str,
        base_uri: Option<&str>,
    ) -> EdmResult<Arc<SchemaRegistry>>;
}
