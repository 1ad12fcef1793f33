//! # Schema registry
//!
//! The central symbol table of the metadata graph: a set of locally declared
//! [`Schema`]s plus lazily resolved external references, answering
//! fully-qualified-name lookups across the combined, possibly multi-document
//! graph.
//!
//! ## Resolution
//!
//! `schema(namespace)` scans local schemas first, then consults the
//! resolved-reference cache, then resolves the matching [`Reference`] through
//! the [`ReferenceResolver`] collaborator (bulk-populating the cache for
//! every include of that reference), and finally falls back to scanning
//! already-resolved children for transitively referenced namespaces.
//! Resolution is demand-driven and memoized: repeated lookups of one
//! external namespace cost a single resolver invocation.
//!
//! ## Phases
//!
//! Build-phase mutation ([`SchemaRegistry::add_schema`],
//! [`SchemaRegistry::add_references`], [`SchemaRegistry::set_base_uri`])
//! takes `&mut self` and therefore cannot interleave with lookups. The read
//! phase is `&self` and safe to share across threads; the resolution cache
//! tolerates concurrent first access because resolving the same URI twice
//! yields equivalent content and only whole entries are ever published.

mod lookup;
mod resolver;

pub use lookup::EntityContainerInfo;
pub use resolver::ReferenceResolver;

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::csdl::{Reference, Schema};
use crate::edm::{EdmError, EdmResult};

/// Cross-registry recursion bound for reference-of-reference resolution.
/// Reference documents that form a cycle would otherwise regress endlessly,
/// each round trip resolving fresh child registries.
const MAX_REFERENCE_DEPTH: usize = 64;

/// Registry of schemas for one metadata document, with lazy resolution of
/// externally referenced documents.
pub struct SchemaRegistry {
    /// Local schemas in add order. At most one per namespace.
    schemas: Vec<Arc<Schema>>,
    /// Namespace-or-alias string -> the reference record declaring it.
    reference_index: FxHashMap<String, Arc<Reference>>,
    /// Reference records in registration order, for alias-info reporting.
    references: Vec<Arc<Reference>>,
    /// Namespace-or-alias string -> resolved child registry. Child
    /// registries are reachable only through this cache; no child holds a
    /// back-reference to its parent.
    resolved: RwLock<FxHashMap<String, Arc<SchemaRegistry>>>,
    base_uri: Option<String>,
    resolver: Option<Arc<dyn ReferenceResolver>>,
}

impl SchemaRegistry {
    /// A registry without a resolver collaborator. Lookups that would need
    /// to resolve an external reference fail with
    /// [`EdmError::NoReferenceResolver`].
    pub fn new() -> Self {
        Self {
            schemas: Vec::new(),
            reference_index: FxHashMap::default(),
            references: Vec::new(),
            resolved: RwLock::new(FxHashMap::default()),
            base_uri: None,
            resolver: None,
        }
    }

    pub fn with_resolver(resolver: Arc<dyn ReferenceResolver>) -> Self {
        Self {
            resolver: Some(resolver),
            ..Self::new()
        }
    }

    // ============================================================
    // Build phase (single writer, before any lookup)
    // ============================================================

    /// Append a local schema. No namespace dedup: one schema per namespace
    /// is a data contract of the producing parser.
    pub fn add_schema(&mut self, schema: Schema) {
        self.schemas.push(Arc::new(schema));
    }

    /// Register reference records, indexing each under every include's
    /// namespace and, when present, its alias.
    pub fn add_references(&mut self, references: impl IntoIterator<Item = Reference>) {
        for reference in references {
            let reference = Arc::new(reference);
            for include in &reference.includes {
                if let Some(alias) = &include.alias {
                    self.reference_index
                        .insert(alias.clone(), Arc::clone(&reference));
                }
                self.reference_index
                    .insert(include.namespace.clone(), Arc::clone(&reference));
            }
            self.references.push(reference);
        }
    }

    /// Set the base URI used when resolving reference URIs, normalized to
    /// end with exactly one trailing separator.
    pub fn set_base_uri(&mut self, base: impl Into<String>) {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        base.push('/');
        self.base_uri = Some(base);
    }

    // ============================================================
    // Accessors
    // ============================================================

    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    /// Local schemas in add order.
    pub fn schemas(&self) -> &[Arc<Schema>] {
        &self.schemas
    }

    pub(crate) fn references(&self) -> &[Arc<Reference>] {
        &self.references
    }

    // ============================================================
    // Schema resolution
    // ============================================================

    /// Resolve a namespace (or alias) to its schema, pulling in external
    /// references on demand. `Ok(None)` when the namespace is simply
    /// unknown; errors only for resolver failures and reference cycles.
    pub fn schema(&self, namespace: &str) -> EdmResult<Option<Arc<Schema>>> {
        self.schema_at(namespace, 0)
    }

    fn schema_at(&self, namespace: &str, depth: usize) -> EdmResult<Option<Arc<Schema>>> {
        if depth > MAX_REFERENCE_DEPTH {
            return Err(EdmError::circular_reference(namespace));
        }
        if let Some(schema) = self.local_schema(namespace) {
            trace!("[SCHEMA] '{}' found locally", namespace);
            return Ok(Some(schema));
        }
        self.reference_schema(namespace, depth)
    }

    /// Linear scan of local schemas, matching the declared namespace or an
    /// assigned alias (include aliases are assigned onto referenced schemas
    /// during resolution).
    fn local_schema(&self, namespace: &str) -> Option<Arc<Schema>> {
        self.schemas
            .iter()
            .find(|s| s.namespace() == namespace || s.alias().as_deref() == Some(namespace))
            .cloned()
    }

    fn reference_schema(&self, namespace: &str, depth: usize) -> EdmResult<Option<Arc<Schema>>> {
        // Already-resolved namespace: delegate to the cached child.
        if let Some(child) = self.resolved.read().get(namespace).cloned() {
            trace!("[SCHEMA] '{}' cache hit", namespace);
            return child.schema_at(namespace, depth + 1);
        }

        // First use of a registered reference: one resolver invocation
        // populates the cache for every include of that reference, so a
        // later lookup of a sibling include is already cached.
        if let Some(reference) = self.reference_index.get(namespace).cloned() {
            let child = self.resolve_reference(&reference)?;
            {
                let mut cache = self.resolved.write();
                for include in &reference.includes {
                    cache
                        .entry(include.namespace.clone())
                        .or_insert_with(|| Arc::clone(&child));
                    if let Some(alias) = &include.alias {
                        if let Some(schema) = child.schema_at(&include.namespace, depth + 1)? {
                            schema.set_alias(alias.clone());
                        }
                        cache
                            .entry(alias.clone())
                            .or_insert_with(|| Arc::clone(&child));
                    }
                }
            }
            if let Some(child) = self.resolved.read().get(namespace).cloned() {
                return child.schema_at(namespace, depth + 1);
            }
        }

        // Reference-of-reference discovery: the namespace may be declared by
        // a document an already-resolved child refers to.
        let mut scanned: Vec<*const SchemaRegistry> = Vec::new();
        let children: Vec<Arc<SchemaRegistry>> = self.resolved.read().values().cloned().collect();
        for child in children {
            if scanned.contains(&Arc::as_ptr(&child)) {
                continue;
            }
            scanned.push(Arc::as_ptr(&child));
            if let Some(schema) = child.schema_at(namespace, depth + 1)? {
                trace!("[SCHEMA] '{}' found transitively", namespace);
                return Ok(Some(schema));
            }
        }

        trace!("[SCHEMA] '{}' not found", namespace);
        Ok(None)
    }

    fn resolve_reference(&self, reference: &Reference) -> EdmResult<Arc<SchemaRegistry>> {
        let resolver = self.resolver.as_ref().ok_or(EdmError::NoReferenceResolver {
            uri: reference.uri.clone(),
        })?;
        debug!(
            "[RESOLVE_REF] uri='{}' base={:?}",
            reference.uri, self.base_uri
        );
        resolver.resolve_reference(&reference.uri, self.base_uri.as_deref())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
