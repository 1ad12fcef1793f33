//! The FQN-keyed query surface of [`SchemaRegistry`].
//!
//! Every lookup returns a well-defined empty result when nothing matches;
//! errors surface only resolver failures and reference cycles encountered
//! while resolving the FQN's namespace.

use std::sync::Arc;

use super::SchemaRegistry;
use crate::base::{AliasInfo, FullQualifiedName};
use crate::csdl::{
    ActionImport, AnnotationGroup, ComplexType, EntityContainer, EntitySet, EntityType, EnumType,
    FunctionImport, Operation, Schema, Singleton, Term, TypeDefinition,
};
use crate::edm::EdmResult;

/// Container identity reported by [`SchemaRegistry::entity_container_info`]:
/// the owning schema's namespace in FQN form, plus the extended container
/// when one is declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityContainerInfo {
    pub container_name: FullQualifiedName,
    pub extends_container: Option<FullQualifiedName>,
}

impl SchemaRegistry {
    pub fn entity_type(&self, fqn: &FullQualifiedName) -> EdmResult<Option<Arc<EntityType>>> {
        Ok(self
            .schema(fqn.namespace())?
            .and_then(|s| s.entity_type(fqn.name()).cloned()))
    }

    pub fn complex_type(&self, fqn: &FullQualifiedName) -> EdmResult<Option<Arc<ComplexType>>> {
        Ok(self
            .schema(fqn.namespace())?
            .and_then(|s| s.complex_type(fqn.name()).cloned()))
    }

    pub fn enum_type(&self, fqn: &FullQualifiedName) -> EdmResult<Option<Arc<EnumType>>> {
        Ok(self
            .schema(fqn.namespace())?
            .and_then(|s| s.enum_type(fqn.name()).cloned()))
    }

    pub fn type_definition(
        &self,
        fqn: &FullQualifiedName,
    ) -> EdmResult<Option<Arc<TypeDefinition>>> {
        Ok(self
            .schema(fqn.namespace())?
            .and_then(|s| s.type_definition(fqn.name()).cloned()))
    }

    pub fn term(&self, fqn: &FullQualifiedName) -> EdmResult<Option<Arc<Term>>> {
        Ok(self
            .schema(fqn.namespace())?
            .and_then(|s| s.term(fqn.name()).cloned()))
    }

    /// Every action overload sharing the FQN's name, in declaration order.
    /// Empty (never absent) when none match.
    pub fn actions(&self, fqn: &FullQualifiedName) -> EdmResult<Vec<Arc<Operation>>> {
        Ok(self
            .schema(fqn.namespace())?
            .map(|s| s.actions_by_name(fqn.name()))
            .unwrap_or_default())
    }

    /// Every function overload sharing the FQN's name, in declaration order.
    pub fn functions(&self, fqn: &FullQualifiedName) -> EdmResult<Vec<Arc<Operation>>> {
        Ok(self
            .schema(fqn.namespace())?
            .map(|s| s.functions_by_name(fqn.name()))
            .unwrap_or_default())
    }

    /// The first container exposed by a local schema, in add order. A
    /// metadata document may hold many schemas, but only one needs to carry
    /// the entity container.
    pub fn entity_container(&self) -> Option<Arc<EntityContainer>> {
        self.schemas()
            .iter()
            .find_map(|s| s.entity_container().cloned())
    }

    /// Without an FQN: the container of the first added schema declaring
    /// one. With an FQN: the container of the schema named by the FQN's
    /// full string.
    pub fn entity_container_info(
        &self,
        fqn: Option<&FullQualifiedName>,
    ) -> EdmResult<Option<EntityContainerInfo>> {
        let schema = match fqn {
            None => self
                .schemas()
                .iter()
                .find(|s| s.entity_container().is_some())
                .cloned(),
            Some(fqn) => self.schema(&fqn.to_string())?,
        };

        Ok(schema.and_then(|schema| {
            schema.entity_container().map(|container| EntityContainerInfo {
                container_name: FullQualifiedName::parse(schema.namespace()),
                extends_container: container
                    .extends_container
                    .as_deref()
                    .map(FullQualifiedName::parse),
            })
        }))
    }

    /// The schema owning the container addressed by a container FQN, keyed
    /// by the FQN's full string form.
    fn container_schema(&self, fqn: &FullQualifiedName) -> EdmResult<Option<Arc<Schema>>> {
        self.schema(&fqn.to_string())
    }

    pub fn entity_set(
        &self,
        container: &FullQualifiedName,
        name: &str,
    ) -> EdmResult<Option<EntitySet>> {
        Ok(self.container_schema(container)?.and_then(|s| {
            s.entity_container()
                .and_then(|c| c.entity_set(name).cloned())
        }))
    }

    pub fn singleton(
        &self,
        container: &FullQualifiedName,
        name: &str,
    ) -> EdmResult<Option<Singleton>> {
        Ok(self.container_schema(container)?.and_then(|s| {
            s.entity_container()
                .and_then(|c| c.singleton(name).cloned())
        }))
    }

    pub fn action_import(
        &self,
        container: &FullQualifiedName,
        name: &str,
    ) -> EdmResult<Option<ActionImport>> {
        Ok(self.container_schema(container)?.and_then(|s| {
            s.entity_container()
                .and_then(|c| c.action_import(name).cloned())
        }))
    }

    pub fn function_import(
        &self,
        container: &FullQualifiedName,
        name: &str,
    ) -> EdmResult<Option<FunctionImport>> {
        Ok(self.container_schema(container)?.and_then(|s| {
            s.entity_container()
                .and_then(|c| c.function_import(name).cloned())
        }))
    }

    /// Delegates to the target schema's own annotation-group lookup.
    pub fn annotations_group(
        &self,
        target: &FullQualifiedName,
        qualifier: Option<&str>,
    ) -> EdmResult<Option<Arc<AnnotationGroup>>> {
        Ok(self
            .schema(target.namespace())?
            .and_then(|s| s.annotation_group(target.name(), qualifier).cloned()))
    }

    /// One alias/namespace pair per local schema carrying an alias (add
    /// order), then one per reference include carrying an alias
    /// (registration order).
    pub fn alias_infos(&self) -> Vec<AliasInfo> {
        let mut infos = Vec::new();
        for schema in self.schemas() {
            if let Some(alias) = schema.alias() {
                infos.push(AliasInfo::new(alias, schema.namespace()));
            }
        }
        for reference in self.references() {
            for include in &reference.includes {
                if let Some(alias) = &include.alias {
                    infos.push(AliasInfo::new(alias.clone(), include.namespace.clone()));
                }
            }
        }
        infos
    }
}
