use crate::activators::{
    FileProfileActivator, JdkVersionProfileActivator, OperatingSystemProfileActivator,
    PropertyProfileActivator,
};
use crate::ports::activator::{ActivatorKind, ProfileActivator};
use std::collections::HashMap;
use std::fmt;

/// Lookup table from condition kind to the activator that evaluates it.
///
/// Filled once at startup and only read during selection.
#[derive(Default)]
pub struct ActivatorRegistry {
    activators: HashMap<ActivatorKind, Box<dyn ProfileActivator>>,
}

impl ActivatorRegistry {
    /// An empty registry. Any condition present on a profile will be
    /// reported as having no activator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the file, JDK, OS and property activators.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(FileProfileActivator);
        registry.register(JdkVersionProfileActivator);
        registry.register(OperatingSystemProfileActivator);
        registry.register(PropertyProfileActivator);
        registry
    }

    /// Register an activator, replacing any previous one of the same kind.
    pub fn register<A>(&mut self, activator: A) -> &mut Self
    where
        A: ProfileActivator + 'static,
    {
        self.activators.insert(activator.kind(), Box::new(activator));
        self
    }

    pub fn by_kind(&self, kind: ActivatorKind) -> Option<&dyn ProfileActivator> {
        self.activators.get(&kind).map(|activator| activator.as_ref())
    }

    /// Registered kinds in evaluation order.
    pub fn kinds(&self) -> Vec<ActivatorKind> {
        ActivatorKind::ALL
            .into_iter()
            .filter(|kind| self.activators.contains_key(kind))
            .collect()
    }
}

impl fmt::Debug for ActivatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivatorRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_covers_every_kind() {
        let registry = ActivatorRegistry::standard();

        assert_eq!(registry.kinds(), ActivatorKind::ALL.to_vec());
        for kind in ActivatorKind::ALL {
            assert_eq!(registry.by_kind(kind).map(|a| a.kind()), Some(kind));
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ActivatorRegistry::new();
        assert!(registry.by_kind(ActivatorKind::Os).is_none());
        assert!(registry.kinds().is_empty());
    }
}
