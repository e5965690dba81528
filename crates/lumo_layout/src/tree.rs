//! Layout tree management

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use taffy::prelude::*;

use crate::element::ElementBounds;

new_key_type! {
    pub struct LayoutNodeId;
}

/// Maps between Lumo node IDs and Taffy node IDs
pub struct LayoutTree {
    taffy: TaffyTree,
    node_map: SlotMap<LayoutNodeId, NodeId>,
    reverse: FxHashMap<NodeId, LayoutNodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            node_map: SlotMap::with_key(),
            reverse: FxHashMap::default(),
        }
    }

    /// Create a new layout node with the given style
    pub fn create_node(&mut self, style: Style) -> LayoutNodeId {
        let taffy_node = self.taffy.new_leaf(style).unwrap();
        let id = self.node_map.insert(taffy_node);
        self.reverse.insert(taffy_node, id);
        id
    }

    /// Set the style for a node
    pub fn set_style(&mut self, id: LayoutNodeId, style: Style) {
        if let Some(&taffy_node) = self.node_map.get(id) {
            let _ = self.taffy.set_style(taffy_node, style);
        }
    }

    /// Add a child to a parent node
    pub fn add_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) {
        if let (Some(&parent_node), Some(&child_node)) =
            (self.node_map.get(parent), self.node_map.get(child))
        {
            let _ = self.taffy.add_child(parent_node, child_node);
        }
    }

    /// Compute layout for a tree rooted at the given node
    pub fn compute_layout(&mut self, root: LayoutNodeId, available_space: Size<AvailableSpace>) {
        if let Some(&taffy_node) = self.node_map.get(root) {
            let _ = self.taffy.compute_layout(taffy_node, available_space);
        }
    }

    /// Get the computed layout for a node
    pub fn get_layout(&self, id: LayoutNodeId) -> Option<&Layout> {
        self.node_map
            .get(id)
            .and_then(|&taffy_node| self.taffy.layout(taffy_node).ok())
    }

    /// Get computed bounds for a node, offset by its parent's absolute position
    pub fn get_bounds(&self, id: LayoutNodeId, parent_offset: (f32, f32)) -> Option<ElementBounds> {
        self.get_layout(id)
            .map(|layout| ElementBounds::from_layout(layout, parent_offset))
    }

    /// Children of a node in insertion order
    pub fn children(&self, id: LayoutNodeId) -> Vec<LayoutNodeId> {
        let Some(&taffy_node) = self.node_map.get(id) else {
            return Vec::new();
        };
        self.taffy
            .children(taffy_node)
            .map(|children| {
                children
                    .iter()
                    .filter_map(|child| self.reverse.get(child).copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    /// Remove a node
    pub fn remove_node(&mut self, id: LayoutNodeId) {
        if let Some(taffy_node) = self.node_map.remove(id) {
            self.reverse.remove(&taffy_node);
            let _ = self.taffy.remove(taffy_node);
        }
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(width: f32, height: f32) -> Style {
        Style {
            size: Size {
                width: Dimension::Length(width),
                height: Dimension::Length(height),
            },
            ..Default::default()
        }
    }

    #[test]
    fn compute_layout_resolves_fixed_sizes() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(fixed(200.0, 100.0));

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(200.0),
                height: AvailableSpace::Definite(100.0),
            },
        );

        let layout = tree.get_layout(root).unwrap();
        assert_eq!(layout.size.width, 200.0);
        assert_eq!(layout.size.height, 100.0);
    }

    #[test]
    fn children_come_back_in_insertion_order() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(Style::default());
        let a = tree.create_node(fixed(10.0, 10.0));
        let b = tree.create_node(fixed(10.0, 10.0));
        tree.add_child(root, a);
        tree.add_child(root, b);

        assert_eq!(tree.children(root), vec![a, b]);
    }

    #[test]
    fn removed_nodes_disappear_from_lookups() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(Style::default());
        let child = tree.create_node(fixed(10.0, 10.0));
        tree.add_child(root, child);

        tree.remove_node(child);
        assert!(tree.get_layout(child).is_none());
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.node_count(), 1);
    }
}
