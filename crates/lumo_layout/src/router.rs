//! Click routing over a built tree
//!
//! Maps pointer positions to element click handlers. Handlers register per
//! node during tree build; a click walks the hit path from the deepest
//! element upward and fires the first interactive ancestor, so clicks on a
//! button's label land on the button.

use lumo_core::events::{event_types, Event, EventData, EventDispatcher};
use slotmap::Key;

use crate::div::ClickHandler;
use crate::tree::LayoutNodeId;

/// Event dispatch target for a layout node
pub fn node_target(node: LayoutNodeId) -> u64 {
    node.data().as_ffi()
}

/// Per-build click handler table
#[derive(Default)]
pub struct ClickRouter {
    dispatcher: EventDispatcher,
    interactive: Vec<LayoutNodeId>,
}

impl ClickRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node's click handler
    pub fn register(&mut self, node: LayoutNodeId, handler: ClickHandler) {
        self.dispatcher
            .register(node_target(node), event_types::POINTER_UP, move |event| {
                handler(event)
            });
        self.interactive.push(node);
    }

    pub fn is_interactive(&self, node: LayoutNodeId) -> bool {
        self.interactive.contains(&node)
    }

    pub fn interactive_count(&self) -> usize {
        self.interactive.len()
    }

    /// Deliver a click along a hit path, deepest element last
    ///
    /// Fires the deepest interactive element on the path as a pointer
    /// down/up pair. Returns whether any handler consumed the click.
    pub fn click(&self, path: &[LayoutNodeId], x: f32, y: f32) -> bool {
        for node in path.iter().rev() {
            if !self.is_interactive(*node) {
                continue;
            }
            let target = node_target(*node);
            let data = EventData::Pointer {
                x,
                y,
                button: 0,
                pressure: 1.0,
            };
            let mut down = Event::new(event_types::POINTER_DOWN, target, data.clone());
            self.dispatcher.dispatch(&mut down);
            let mut up = Event::new(event_types::POINTER_UP, target, data);
            self.dispatcher.dispatch(&mut up);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LayoutTree;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use taffy::prelude::Style;

    #[test]
    fn click_fires_the_deepest_interactive_node() {
        let mut tree = LayoutTree::new();
        let outer = tree.create_node(Style::default());
        let inner = tree.create_node(Style::default());
        let label = tree.create_node(Style::default());

        let outer_hits = Arc::new(AtomicU32::new(0));
        let inner_hits = Arc::new(AtomicU32::new(0));

        let mut router = ClickRouter::new();
        let outer_counter = outer_hits.clone();
        router.register(
            outer,
            Arc::new(move |_| {
                outer_counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let inner_counter = inner_hits.clone();
        router.register(
            inner,
            Arc::new(move |_| {
                inner_counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        // Label itself is not interactive; the click bubbles to `inner`
        assert!(router.click(&[outer, inner, label], 5.0, 5.0));
        assert_eq!(inner_hits.load(Ordering::SeqCst), 1);
        assert_eq!(outer_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn click_without_interactive_path_is_unhandled() {
        let mut tree = LayoutTree::new();
        let a = tree.create_node(Style::default());
        let b = tree.create_node(Style::default());

        let router = ClickRouter::new();
        assert!(!router.click(&[a, b], 0.0, 0.0));
    }

    #[test]
    fn handler_receives_pointer_coordinates() {
        let mut tree = LayoutTree::new();
        let node = tree.create_node(Style::default());

        let seen = Arc::new(std::sync::Mutex::new(None));
        let mut router = ClickRouter::new();
        let seen_clone = seen.clone();
        router.register(
            node,
            Arc::new(move |event| {
                if let EventData::Pointer { x, y, .. } = event.data {
                    *seen_clone.lock().unwrap() = Some((x, y));
                }
            }),
        );

        router.click(&[node], 12.0, 34.0);
        assert_eq!(*seen.lock().unwrap(), Some((12.0, 34.0)));
    }
}
