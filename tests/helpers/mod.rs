//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use odata_edm::{EdmError, EdmResult, FullQualifiedName, ReferenceResolver, SchemaRegistry};

pub fn fqn(namespace: &str, name: &str) -> FullQualifiedName {
    FullQualifiedName::new(namespace, name)
}

/// Resolver double serving prebuilt registries by URI and counting calls.
pub struct CountingResolver {
    documents: Vec<(String, Arc<SchemaRegistry>)>,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new(documents: Vec<(String, Arc<SchemaRegistry>)>) -> Self {
        Self {
            documents,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReferenceResolver for CountingResolver {
    fn resolve_reference(
        &self,
        uri: &str,
        _base_uri: Option<&str>,
    ) -> EdmResult<Arc<SchemaRegistry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.documents
            .iter()
            .find(|(known, _)| known == uri)
            .map(|(_, registry)| Arc::clone(registry))
            .ok_or_else(|| EdmError::reference_resolution(uri, "document not available"))
    }
}
