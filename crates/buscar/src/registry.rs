//! Catalogue of named selector definitions.
//!
//! The registry is plain mutable state with no internal locking. The
//! intended discipline is a single writer at startup (register or
//! customize kinds), read-only afterwards; a registry is an ordinary
//! value, injectable into tests, never a hidden singleton.

use std::sync::Arc;

use crate::builtins::register_builtins;
use crate::definition::SelectorDefinition;

/// Ordered catalogue of selector definitions, keyed by name
#[derive(Debug, Clone, Default)]
pub struct SelectorRegistry {
    entries: Vec<Arc<SelectorDefinition>>,
}

impl SelectorRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in kinds
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Insert or replace the definition keyed by its name.
    ///
    /// Last registration for a name wins — this is how applications
    /// customize a built-in kind. Replacement keeps the original
    /// registration position, so a customized kind retains its
    /// auto-detection precedence.
    pub fn add(&mut self, definition: SelectorDefinition) {
        let definition = Arc::new(definition);
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name() == definition.name())
        {
            Some(entry) => *entry = definition,
            None => self.entries.push(definition),
        }
    }

    /// Delete the definition with this name; no-op when absent
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name() != name);
    }

    /// Exact lookup by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Arc<SelectorDefinition>> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .cloned()
    }

    /// Iterate over definitions in registration order
    pub fn all(&self) -> impl Iterator<Item = &Arc<SelectorDefinition>> {
        self.entries.iter()
    }

    /// Number of registered definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no definitions are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::XPathExpression;

    fn definition(name: &str) -> SelectorDefinition {
        SelectorDefinition::builder(name)
            .xpath(|locator, _| XPathExpression::from(format!(".//{locator}")))
            .build()
            .unwrap()
    }

    mod registry_tests {
        use super::*;

        #[test]
        fn test_add_and_find() {
            let mut registry = SelectorRegistry::new();
            registry.add(definition("css"));
            assert!(registry.find("css").is_some());
            assert!(registry.find("xpath").is_none());
        }

        #[test]
        fn test_find_is_exact() {
            let mut registry = SelectorRegistry::new();
            registry.add(definition("field"));
            assert!(registry.find("fiel").is_none());
            assert!(registry.find("Field").is_none());
        }

        #[test]
        fn test_add_replaces_without_error() {
            let mut registry = SelectorRegistry::new();
            registry.add(definition("css"));
            registry.add(definition("css"));
            assert_eq!(registry.len(), 1);
        }

        #[test]
        fn test_replace_keeps_registration_position() {
            let mut registry = SelectorRegistry::new();
            registry.add(definition("first"));
            registry.add(definition("second"));
            registry.add(definition("first"));

            let order: Vec<&str> = registry.all().map(|entry| entry.name()).collect();
            assert_eq!(order, vec!["first", "second"]);
        }

        #[test]
        fn test_remove_absent_is_noop() {
            let mut registry = SelectorRegistry::new();
            registry.remove("missing");
            assert!(registry.is_empty());
        }

        #[test]
        fn test_all_is_restartable() {
            let mut registry = SelectorRegistry::new();
            registry.add(definition("a"));
            registry.add(definition("b"));
            assert_eq!(registry.all().count(), 2);
            assert_eq!(registry.all().count(), 2);
        }

        #[test]
        fn test_with_builtins_registers_xpath_first() {
            let registry = SelectorRegistry::with_builtins();
            let first = registry.all().next().map(|entry| entry.name().to_string());
            assert_eq!(first.as_deref(), Some("xpath"));
            assert!(registry.find("css").is_some());
            assert!(registry.find("field").is_some());
        }
    }
}
