//! Built UI tree bridging element builders to layout
//!
//! [`UiTree::from_element`] walks a builder hierarchy once: layout nodes
//! go into the [`LayoutTree`], visual properties into per-node render
//! data, identities into the caller's [`ElementRegistry`], and click
//! handlers into the tree's [`ClickRouter`].

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use taffy::prelude::*;

use lumo_core::Color;

use crate::div::ElementBuilder;
use crate::element::{ElementBounds, RenderProps};
use crate::registry::{ElementRegistry, RegisteredElement};
use crate::router::ClickRouter;
use crate::tree::{LayoutNodeId, LayoutTree};

/// Stores an element's type
#[derive(Clone)]
pub enum ElementType {
    /// A div/container element
    Div,
    /// A text element with content
    Text(TextData),
}

/// Text data attached to a text node
#[derive(Clone)]
pub struct TextData {
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

/// Per-node data kept after build
#[derive(Clone)]
pub struct RenderNode {
    pub props: RenderProps,
    pub element_type: ElementType,
}

/// Nodes a pointer position passes through, root first
pub type HitPath = SmallVec<[LayoutNodeId; 8]>;

/// A fully built UI tree
pub struct UiTree {
    layout_tree: LayoutTree,
    render_nodes: FxHashMap<LayoutNodeId, RenderNode>,
    router: ClickRouter,
    root: Option<LayoutNodeId>,
}

impl UiTree {
    fn new() -> Self {
        Self {
            layout_tree: LayoutTree::new(),
            render_nodes: FxHashMap::default(),
            router: ClickRouter::new(),
            root: None,
        }
    }

    /// Build a tree from an element builder, registering ids as it goes
    ///
    /// The registry is cleared first: entries always describe the most
    /// recent build.
    pub fn from_element<E: ElementBuilder>(element: &E, registry: &ElementRegistry) -> Self {
        registry.clear();
        let mut tree = Self::new();
        tree.root = Some(tree.build_element(element, registry));
        tree
    }

    fn build_element(
        &mut self,
        element: &dyn ElementBuilder,
        registry: &ElementRegistry,
    ) -> LayoutNodeId {
        let node_id = element.build(&mut self.layout_tree);
        let mut props = element.render_props();
        props.node_id = Some(node_id);

        let text_info = element.text_render_info();
        let element_type = match &text_info {
            Some(info) => ElementType::Text(TextData {
                content: info.content.clone(),
                font_size: info.font_size,
                color: info.color,
            }),
            None => ElementType::Div,
        };

        let identity = element.identity();
        if let Some(id) = identity.id {
            registry.register(
                id,
                RegisteredElement {
                    node: node_id,
                    classes: identity.classes,
                    text: text_info.map(|info| info.content),
                },
            );
        }

        if let Some(handler) = element.click_handler() {
            self.router.register(node_id, handler);
        }

        self.render_nodes.insert(
            node_id,
            RenderNode {
                props,
                element_type,
            },
        );

        for child in element.children_builders() {
            let child_id = self.build_element(child.as_ref(), registry);
            self.layout_tree.add_child(node_id, child_id);
        }

        node_id
    }

    /// Get the root node ID
    pub fn root(&self) -> Option<LayoutNodeId> {
        self.root
    }

    /// Compute layout for the given viewport size
    pub fn compute_layout(&mut self, width: f32, height: f32) {
        if let Some(root) = self.root {
            self.layout_tree.compute_layout(
                root,
                Size {
                    width: AvailableSpace::Definite(width),
                    height: AvailableSpace::Definite(height),
                },
            );
        }
    }

    /// Get the layout tree for inspection
    pub fn layout(&self) -> &LayoutTree {
        &self.layout_tree
    }

    /// Get render node data
    pub fn get_render_node(&self, node: LayoutNodeId) -> Option<&RenderNode> {
        self.render_nodes.get(&node)
    }

    /// Iterate over all nodes with their render data
    pub fn iter_nodes(&self) -> impl Iterator<Item = (LayoutNodeId, &RenderNode)> {
        self.render_nodes.iter().map(|(&id, node)| (id, node))
    }

    /// Absolute bounds of a node after layout
    pub fn bounds_of(&self, target: LayoutNodeId) -> Option<ElementBounds> {
        let root = self.root?;
        self.find_bounds(root, target, (0.0, 0.0))
    }

    fn find_bounds(
        &self,
        node: LayoutNodeId,
        target: LayoutNodeId,
        parent_offset: (f32, f32),
    ) -> Option<ElementBounds> {
        let bounds = self.layout_tree.get_bounds(node, parent_offset)?;
        if node == target {
            return Some(bounds);
        }
        for child in self.layout_tree.children(node) {
            if let Some(found) = self.find_bounds(child, target, (bounds.x, bounds.y)) {
                return Some(found);
            }
        }
        None
    }

    /// Nodes under a point, outermost first
    pub fn hit_path(&self, x: f32, y: f32) -> HitPath {
        let mut path = HitPath::new();
        if let Some(root) = self.root {
            self.descend_hit(root, (0.0, 0.0), x, y, &mut path);
        }
        path
    }

    fn descend_hit(
        &self,
        node: LayoutNodeId,
        parent_offset: (f32, f32),
        x: f32,
        y: f32,
        path: &mut HitPath,
    ) -> bool {
        let Some(bounds) = self.layout_tree.get_bounds(node, parent_offset) else {
            return false;
        };
        if !bounds.contains(x, y) {
            return false;
        }
        path.push(node);
        let child_offset = (bounds.x, bounds.y);
        for child in self.layout_tree.children(node) {
            if self.descend_hit(child, child_offset, x, y, path) {
                break;
            }
        }
        true
    }

    /// Deliver a click at a point; returns whether a handler consumed it
    pub fn click(&self, x: f32, y: f32) -> bool {
        let path = self.hit_path(x, y);
        self.router.click(&path, x, y)
    }

    /// The click router for this build
    pub fn router(&self) -> &ClickRouter {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::div::div;
    use crate::text::text;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn builds_a_tree_with_a_root() {
        let registry = ElementRegistry::new();
        let ui = div().w(100.0).h(100.0).child(div().w(50.0).h(50.0));

        let tree = UiTree::from_element(&ui, &registry);
        assert!(tree.root().is_some());
    }

    #[test]
    fn computes_layout_for_nested_children() {
        let registry = ElementRegistry::new();
        let ui = div()
            .w(200.0)
            .h(200.0)
            .flex_col()
            .child(div().id("top").h(50.0).w_full())
            .child(div().id("rest").flex_grow().w_full());

        let mut tree = UiTree::from_element(&ui, &registry);
        tree.compute_layout(200.0, 200.0);

        let top = tree.bounds_of(registry.node_of("top").unwrap()).unwrap();
        let rest = tree.bounds_of(registry.node_of("rest").unwrap()).unwrap();

        assert_eq!(top.height, 50.0);
        assert_eq!(rest.y, 50.0);
        assert_eq!(rest.height, 150.0);
    }

    #[test]
    fn registers_ids_classes_and_text() {
        let registry = ElementRegistry::new();
        let ui = div()
            .id("root")
            .class("shell")
            .w(100.0)
            .h(100.0)
            .child(text("Hello").id("greeting"));

        let _tree = UiTree::from_element(&ui, &registry);

        assert!(registry.has_class("root", "shell"));
        assert_eq!(registry.text_of("greeting").as_deref(), Some("Hello"));
        assert!(registry.text_of("root").is_none());
    }

    #[test]
    fn rebuild_replaces_registry_contents() {
        let registry = ElementRegistry::new();
        let first = div().id("only-in-first").w(10.0).h(10.0);
        let _tree = UiTree::from_element(&first, &registry);
        assert!(registry.node_of("only-in-first").is_some());

        let second = div().id("only-in-second").w(10.0).h(10.0);
        let _tree = UiTree::from_element(&second, &registry);
        assert!(registry.node_of("only-in-first").is_none());
        assert!(registry.node_of("only-in-second").is_some());
    }

    #[test]
    fn click_routes_through_the_hit_path() {
        let registry = ElementRegistry::new();
        let clicks = Arc::new(AtomicU32::new(0));
        let counter = clicks.clone();

        let ui = div()
            .w(200.0)
            .h(100.0)
            .child(
                div()
                    .id("button")
                    .w(80.0)
                    .h(40.0)
                    .on_click(move |_| {
                        counter.fetch_add(1, Ordering::SeqCst);
                    })
                    .child(text("Click me!")),
            )
            .child(div().w(80.0).h(40.0));

        let mut tree = UiTree::from_element(&ui, &registry);
        tree.compute_layout(200.0, 100.0);

        // Inside the button, on its label
        assert!(tree.click(10.0, 10.0));
        // Outside every interactive element
        assert!(!tree.click(150.0, 90.0));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn hit_path_runs_outermost_to_innermost() {
        let registry = ElementRegistry::new();
        let ui = div()
            .id("outer")
            .w(100.0)
            .h(100.0)
            .child(div().id("inner").w(50.0).h(50.0));

        let mut tree = UiTree::from_element(&ui, &registry);
        tree.compute_layout(100.0, 100.0);

        let path = tree.hit_path(10.0, 10.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], registry.node_of("outer").unwrap());
        assert_eq!(path[1], registry.node_of("inner").unwrap());
    }
}
