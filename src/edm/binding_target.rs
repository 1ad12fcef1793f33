//! Binding targets: the entity set or singleton a bound operation's receiver
//! is attached to.

use std::sync::Arc;

use tracing::trace;

use crate::csdl::{EntityContainer, EntitySet, NavigationPropertyBinding, Singleton};

/// An entity set or singleton, paired with the container that owns it so
/// navigation-property bindings can be chased to sibling targets.
#[derive(Clone, Debug)]
pub struct BindingTarget {
    kind: BindingTargetKind,
    container: Arc<EntityContainer>,
}

#[derive(Clone, Debug)]
enum BindingTargetKind {
    EntitySet(EntitySet),
    Singleton(Singleton),
}

impl BindingTarget {
    pub fn entity_set(set: EntitySet, container: Arc<EntityContainer>) -> Self {
        Self {
            kind: BindingTargetKind::EntitySet(set),
            container,
        }
    }

    pub fn singleton(singleton: Singleton, container: Arc<EntityContainer>) -> Self {
        Self {
            kind: BindingTargetKind::Singleton(singleton),
            container,
        }
    }

    /// Convenience lookup: build a target from a named member of `container`,
    /// checking entity sets before singletons.
    pub fn from_container(name: &str, container: &Arc<EntityContainer>) -> Option<Self> {
        if let Some(set) = container.entity_set(name) {
            return Some(Self::entity_set(set.clone(), Arc::clone(container)));
        }
        container
            .singleton(name)
            .map(|s| Self::singleton(s.clone(), Arc::clone(container)))
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            BindingTargetKind::EntitySet(set) => &set.name,
            BindingTargetKind::Singleton(singleton) => &singleton.name,
        }
    }

    pub fn is_entity_set(&self) -> bool {
        matches!(self.kind, BindingTargetKind::EntitySet(_))
    }

    pub fn as_entity_set(&self) -> Option<&EntitySet> {
        match &self.kind {
            BindingTargetKind::EntitySet(set) => Some(set),
            BindingTargetKind::Singleton(_) => None,
        }
    }

    pub fn container(&self) -> &Arc<EntityContainer> {
        &self.container
    }

    fn navigation_bindings(&self) -> &[NavigationPropertyBinding] {
        match &self.kind {
            BindingTargetKind::EntitySet(set) => &set.navigation_property_bindings,
            BindingTargetKind::Singleton(singleton) => &singleton.navigation_property_bindings,
        }
    }

    /// Resolve an entity-set path against this target by scanning its
    /// navigation-property bindings.
    ///
    /// An entity-set path may carry the binding parameter's name as a leading
    /// segment (`param/navProp`), while bindings are declared relative to the
    /// target (`navProp`); both spellings match.
    pub fn related_binding_target(&self, path: &str) -> Option<BindingTarget> {
        let stripped = path.split_once('/').map(|(_, rest)| rest);
        let binding = self
            .navigation_bindings()
            .iter()
            .find(|b| b.path == path || Some(b.path.as_str()) == stripped)?;
        trace!(
            "[BINDING_TARGET] path='{}' on '{}' -> target '{}'",
            path,
            self.name(),
            binding.target
        );
        Self::from_container(&binding.target, &self.container)
    }
}
