//! Text element builder

use lumo_core::Color;
use taffy::prelude::*;

use crate::div::{ElementBuilder, ElementIdentity, TextRenderInfo};
use crate::element::RenderProps;
use crate::text_measure::{HeuristicTextMeasurer, TextLayoutOptions, TextMeasurer};
use crate::tree::{LayoutNodeId, LayoutTree};

/// A text leaf element
///
/// Sized at build time from its content so flexbox places it correctly.
pub struct Text {
    content: String,
    font_size: f32,
    color: Color,
    line_height: f32,
    max_width: Option<f32>,
    identity: ElementIdentity,
}

/// Create a new text element
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 16.0,
            color: Color::BLACK,
            line_height: 1.2,
            max_width: None,
            identity: ElementIdentity::default(),
        }
    }

    /// Font size in px
    pub fn size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Line height as a multiple of font size
    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Wrap at this width, px
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

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

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn text_color(&self) -> Color {
        self.color
    }

    fn measure_options(&self) -> TextLayoutOptions {
        TextLayoutOptions {
            line_height: self.line_height,
            max_width: self.max_width,
            ..Default::default()
        }
    }
}

impl ElementBuilder for Text {
    fn build(&self, tree: &mut LayoutTree) -> LayoutNodeId {
        let metrics =
            HeuristicTextMeasurer.measure(&self.content, self.font_size, &self.measure_options());
        tree.create_node(Style {
            size: Size {
                width: Dimension::Length(metrics.width),
                height: Dimension::Length(metrics.height),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
    }

    fn render_props(&self) -> RenderProps {
        RenderProps::default()
    }

    fn children_builders(&self) -> &[Box<dyn ElementBuilder>] {
        &[]
    }

    fn identity(&self) -> ElementIdentity {
        self.identity.clone()
    }

    fn text_render_info(&self) -> Option<TextRenderInfo> {
        Some(TextRenderInfo {
            content: self.content.clone(),
            font_size: self.font_size,
            color: self.color,
        })
    }
}
