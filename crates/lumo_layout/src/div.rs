//! Container element builder
//!
//! `div()` starts a fluent builder chain; [`ElementBuilder`] is the trait
//! every buildable element implements so [`UiTree`](crate::ui_tree::UiTree)
//! can assemble layouts from mixed element types.

use std::sync::Arc;

use lumo_core::{Color, Event, Shadow};
use taffy::prelude::*;

use crate::element::RenderProps;
use crate::tree::{LayoutNodeId, LayoutTree};

/// Shared click callback attached to an element
pub type ClickHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Stable identity a builder assigns to its element
#[derive(Clone, Debug, Default)]
pub struct ElementIdentity {
    /// Unique lookup id, registered when present
    pub id: Option<String>,
    /// Style classes, mutable after build through the registry
    pub classes: Vec<String>,
}

/// Text payload for text elements
#[derive(Clone, Debug)]
pub struct TextRenderInfo {
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

/// Buildable UI element
pub trait ElementBuilder: Send + Sync {
    /// Create this element's layout node
    fn build(&self, tree: &mut LayoutTree) -> LayoutNodeId;

    /// Visual properties for the node
    fn render_props(&self) -> RenderProps;

    /// Child elements in layout order
    fn children_builders(&self) -> &[Box<dyn ElementBuilder>];

    /// Identity to register for this element
    fn identity(&self) -> ElementIdentity {
        ElementIdentity::default()
    }

    /// Text payload, `Some` only for text elements
    fn text_render_info(&self) -> Option<TextRenderInfo> {
        None
    }

    /// Click callback, `Some` only for interactive elements
    fn click_handler(&self) -> Option<ClickHandler> {
        None
    }
}

/// A div/container element
pub struct Div {
    style: Style,
    props: RenderProps,
    identity: ElementIdentity,
    handler: Option<ClickHandler>,
    children: Vec<Box<dyn ElementBuilder>>,
}

/// Create a new container element
pub fn div() -> Div {
    Div::new()
}

impl Div {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            props: RenderProps::default(),
            identity: ElementIdentity::default(),
            handler: None,
            children: Vec::new(),
        }
    }

    // ----- Size -----

    /// Fixed width in px
    pub fn w(mut self, width: f32) -> Self {
        self.style.size.width = Dimension::Length(width);
        self
    }

    /// Fixed height in px
    pub fn h(mut self, height: f32) -> Self {
        self.style.size.height = Dimension::Length(height);
        self
    }

    /// Width 100% of parent
    pub fn w_full(mut self) -> Self {
        self.style.size.width = Dimension::Percent(1.0);
        self
    }

    /// Height 100% of parent
    pub fn h_full(mut self) -> Self {
        self.style.size.height = Dimension::Percent(1.0);
        self
    }

    /// Fixed width and height
    pub fn square(self, side: f32) -> Self {
        self.w(side).h(side)
    }

    // ----- Flex -----

    pub fn flex_row(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Row;
        self
    }

    pub fn flex_col(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    /// Grow to fill remaining space
    pub fn flex_grow(mut self) -> Self {
        self.style.flex_grow = 1.0;
        self
    }

    pub fn items_center(mut self) -> Self {
        self.style.align_items = Some(AlignItems::Center);
        self
    }

    pub fn justify_center(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::Center);
        self
    }

    pub fn justify_between(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::SpaceBetween);
        self
    }

    /// Gap between children on both axes, px
    pub fn gap(mut self, gap: f32) -> Self {
        self.style.gap = Size {
            width: LengthPercentage::Length(gap),
            height: LengthPercentage::Length(gap),
        };
        self
    }

    // ----- Spacing -----

    /// Padding on all sides, px
    pub fn p(mut self, padding: f32) -> Self {
        self.style.padding = Rect {
            left: LengthPercentage::Length(padding),
            right: LengthPercentage::Length(padding),
            top: LengthPercentage::Length(padding),
            bottom: LengthPercentage::Length(padding),
        };
        self
    }

    /// Horizontal padding, px
    pub fn px(mut self, padding: f32) -> Self {
        self.style.padding.left = LengthPercentage::Length(padding);
        self.style.padding.right = LengthPercentage::Length(padding);
        self
    }

    /// Vertical padding, px
    pub fn py(mut self, padding: f32) -> Self {
        self.style.padding.top = LengthPercentage::Length(padding);
        self.style.padding.bottom = LengthPercentage::Length(padding);
        self
    }

    // ----- Visuals -----

    /// Background color
    pub fn bg(mut self, color: Color) -> Self {
        self.props.background = Some(color);
        self
    }

    /// Uniform corner radius
    pub fn rounded(mut self, radius: f32) -> Self {
        self.props.border_radius = lumo_core::CornerRadius::uniform(radius);
        self
    }

    /// Border with uniform width and a stroke color
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.style.border = Rect {
            left: LengthPercentage::Length(width),
            right: LengthPercentage::Length(width),
            top: LengthPercentage::Length(width),
            bottom: LengthPercentage::Length(width),
        };
        self.props.border_color = Some(color);
        self
    }

    /// Drop shadow
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.props.shadow = Some(shadow);
        self
    }

    /// Element opacity
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.props.opacity = opacity;
        self
    }

    // ----- Identity and behavior -----

    /// Assign a lookup id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.identity.id = Some(id.into());
        self
    }

    /// Add a style class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.identity.classes.push(class.into());
        self
    }

    /// Attach a click callback
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Append a child element
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Default for Div {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder for Div {
    fn build(&self, tree: &mut LayoutTree) -> LayoutNodeId {
        tree.create_node(self.style.clone())
    }

    fn render_props(&self) -> RenderProps {
        self.props.clone()
    }

    fn children_builders(&self) -> &[Box<dyn ElementBuilder>] {
        &self.children
    }

    fn identity(&self) -> ElementIdentity {
        self.identity.clone()
    }

    fn click_handler(&self) -> Option<ClickHandler> {
        self.handler.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_accumulates_style_and_props() {
        let element = div()
            .w(120.0)
            .h(40.0)
            .flex_row()
            .gap(8.0)
            .bg(Color::WHITE)
            .rounded(6.0)
            .id("panel")
            .class("elevated");

        assert_eq!(element.style.size.width, Dimension::Length(120.0));
        assert_eq!(element.style.flex_direction, FlexDirection::Row);
        assert_eq!(element.props.background, Some(Color::WHITE));
        assert_eq!(element.identity.id.as_deref(), Some("panel"));
        assert_eq!(element.identity.classes, vec!["elevated".to_string()]);
    }

    #[test]
    fn children_keep_append_order() {
        let element = div()
            .child(div().id("first"))
            .child(div().id("second"));

        let ids: Vec<_> = element
            .children_builders()
            .iter()
            .map(|c| c.identity().id.unwrap())
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
