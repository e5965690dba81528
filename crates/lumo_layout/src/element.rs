//! Element types for layout-driven UI
//!
//! Provides computed bounds and the visual properties attached to each
//! node of a built tree.

use lumo_core::{Color, CornerRadius, Point, Rect, Shadow};
use taffy::Layout;

use crate::tree::LayoutNodeId;

/// Computed layout bounds for an element after layout computation
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementBounds {
    /// Absolute x position
    pub x: f32,
    /// Absolute y position
    pub y: f32,
    /// Computed width
    pub width: f32,
    /// Computed height
    pub height: f32,
}

impl ElementBounds {
    /// Create bounds from a Taffy Layout with parent offset
    pub fn from_layout(layout: &Layout, parent_offset: (f32, f32)) -> Self {
        Self {
            x: parent_offset.0 + layout.location.x,
            y: parent_offset.1 + layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        }
    }

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to a lumo_core Rect
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Whether the point lies inside these bounds
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.to_rect().contains(Point::new(x, y))
    }

    /// Get bounds relative to self (origin at 0,0)
    pub fn local(&self) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

/// Visual properties attached to an element
#[derive(Clone)]
pub struct RenderProps {
    /// Background fill color
    pub background: Option<Color>,
    /// Corner radius for rounded rectangles
    pub border_radius: CornerRadius,
    /// Border stroke color, when the element draws a border
    pub border_color: Option<Color>,
    /// Drop shadow
    pub shadow: Option<Shadow>,
    /// Element opacity, 1.0 = fully opaque
    pub opacity: f32,
    /// Node ID for looking up children
    pub node_id: Option<LayoutNodeId>,
}

impl Default for RenderProps {
    fn default() -> Self {
        Self {
            background: None,
            border_radius: CornerRadius::ZERO,
            border_color: None,
            shadow: None,
            opacity: 1.0,
            node_id: None,
        }
    }
}

impl RenderProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set background color
    pub fn with_bg_color(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set corner radius
    pub fn with_border_radius(mut self, radius: CornerRadius) -> Self {
        self.border_radius = radius;
        self
    }

    /// Set uniform corner radius
    pub fn with_rounded(mut self, radius: f32) -> Self {
        self.border_radius = CornerRadius::uniform(radius);
        self
    }

    /// Set drop shadow
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set node ID
    pub fn with_node_id(mut self, id: LayoutNodeId) -> Self {
        self.node_id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contain_edges_but_not_outside() {
        let bounds = ElementBounds::new(10.0, 10.0, 20.0, 20.0);
        assert!(bounds.contains(10.0, 10.0));
        assert!(bounds.contains(30.0, 30.0));
        assert!(!bounds.contains(9.9, 10.0));
        assert!(!bounds.contains(10.0, 30.1));
    }

    #[test]
    fn local_strips_position() {
        let bounds = ElementBounds::new(5.0, 7.0, 40.0, 30.0);
        let local = bounds.local();
        assert_eq!(local.x, 0.0);
        assert_eq!(local.y, 0.0);
        assert_eq!(local.width, 40.0);
        assert_eq!(local.height, 30.0);
    }
}
