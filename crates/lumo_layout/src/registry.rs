//! Element registry for programmatic lookup
//!
//! O(1) lookup of built elements by string id. The registry outlives any
//! single tree build: the app clears and refills it on rebuild, so handles
//! held elsewhere (theme markers, diagnostics probes) stay valid across
//! rebuilds.

use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

use crate::tree::LayoutNodeId;

/// Registered state of one element
#[derive(Clone, Debug)]
pub struct RegisteredElement {
    /// Layout node from the most recent build
    pub node: LayoutNodeId,
    /// Active style classes
    pub classes: Vec<String>,
    /// Text content, for text elements
    pub text: Option<String>,
}

/// Shared element registry for thread-safe access
pub type SharedElementRegistry = Arc<ElementRegistry>;

/// Id-keyed element lookup with interior mutability
#[derive(Default)]
pub struct ElementRegistry {
    entries: RwLock<FxHashMap<String, RegisteredElement>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under an id, replacing any previous entry
    pub fn register(&self, id: impl Into<String>, element: RegisteredElement) {
        self.entries.write().unwrap().insert(id.into(), element);
    }

    /// Layout node for an id
    pub fn node_of(&self, id: &str) -> Option<LayoutNodeId> {
        self.entries.read().unwrap().get(id).map(|e| e.node)
    }

    /// Whether the element carries the class
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.entries
            .read()
            .unwrap()
            .get(id)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    /// Add or remove a class; returns whether anything changed
    pub fn set_class(&self, id: &str, class: &str, enabled: bool) -> bool {
        let mut entries = self.entries.write().unwrap();
        let Some(element) = entries.get_mut(id) else {
            tracing::debug!("ElementRegistry::set_class - unknown element {:?}", id);
            return false;
        };

        let present = element.classes.iter().position(|c| c == class);
        match (enabled, present) {
            (true, None) => {
                element.classes.push(class.to_string());
                true
            }
            (false, Some(index)) => {
                element.classes.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Text content for an id, when the element has text
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.entries.read().unwrap().get(id)?.text.clone()
    }

    /// All registered ids
    pub fn ids(&self) -> Vec<String> {
        self.entries.read().unwrap().keys().cloned().collect()
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> Vec<(String, RegisteredElement)> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .map(|(id, element)| (id.clone(), element.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Drop all entries, typically right before a rebuild
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LayoutTree;
    use taffy::prelude::Style;

    fn element(tree: &mut LayoutTree) -> RegisteredElement {
        RegisteredElement {
            node: tree.create_node(Style::default()),
            classes: Vec::new(),
            text: None,
        }
    }

    #[test]
    fn set_class_reports_changes_only() {
        let mut tree = LayoutTree::new();
        let registry = ElementRegistry::new();
        registry.register("root", element(&mut tree));

        assert!(registry.set_class("root", "dark", true));
        assert!(!registry.set_class("root", "dark", true));
        assert!(registry.has_class("root", "dark"));

        assert!(registry.set_class("root", "dark", false));
        assert!(!registry.set_class("root", "dark", false));
        assert!(!registry.has_class("root", "dark"));
    }

    #[test]
    fn unknown_ids_are_inert() {
        let registry = ElementRegistry::new();
        assert!(!registry.set_class("ghost", "dark", true));
        assert!(!registry.has_class("ghost", "dark"));
        assert!(registry.node_of("ghost").is_none());
        assert!(registry.text_of("ghost").is_none());
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut tree = LayoutTree::new();
        let registry = ElementRegistry::new();
        registry.register("a", element(&mut tree));
        registry.register("b", element(&mut tree));
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
    }
}
