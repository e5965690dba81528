//! Button component
//!
//! A themed push button with shadcn-style variants.
//!
//! # Example
//!
//! ```ignore
//! use lumo_ui::prelude::*;
//!
//! button(&store, "Click me!")
//!     .variant(ButtonVariant::Secondary)
//!     .on_click(|| println!("clicked"))
//! ```

use std::sync::{Arc, OnceLock};

use lumo_core::Color;
use lumo_layout::div::{div, ClickHandler, Div, ElementBuilder, ElementIdentity, TextRenderInfo};
use lumo_layout::element::RenderProps;
use lumo_layout::text::text;
use lumo_layout::tree::{LayoutNodeId, LayoutTree};
use lumo_theme::{ColorToken, FontSizeToken, OpacityToken, RadiusToken, SpacingToken, ThemeStore};

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary brand color
    #[default]
    Default,
    /// Filled with the secondary color
    Secondary,
    /// Filled with the destructive color
    Destructive,
    /// Border only, background matches the surface
    Outline,
    /// No fill and no border until interaction
    Ghost,
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button (32px tall)
    Sm,
    /// Medium button (36px tall)
    #[default]
    Default,
    /// Large button (40px tall)
    Lg,
}

impl ButtonSize {
    fn height(&self) -> f32 {
        match self {
            ButtonSize::Sm => 32.0,
            ButtonSize::Default => 36.0,
            ButtonSize::Lg => 40.0,
        }
    }

    fn padding_x(&self, store: &ThemeStore) -> f32 {
        match self {
            ButtonSize::Sm => store.spacing_value(SpacingToken::Space3),
            ButtonSize::Default => store.spacing_value(SpacingToken::Space4),
            ButtonSize::Lg => store.spacing_value(SpacingToken::Space6),
        }
    }

    fn font_size(&self, store: &ThemeStore) -> f32 {
        match self {
            ButtonSize::Sm => store.font_size(FontSizeToken::Xs),
            ButtonSize::Default => store.font_size(FontSizeToken::Sm),
            ButtonSize::Lg => store.font_size(FontSizeToken::Base),
        }
    }
}

/// Button component
///
/// Reads its colors from the store at build time; rebuild after a theme
/// change to pick up the new palette.
pub struct Button {
    store: ThemeStore,
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    id: Option<String>,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
    composed: OnceLock<Div>,
}

impl Button {
    pub fn new(store: &ThemeStore, label: impl Into<String>) -> Self {
        Self {
            store: store.clone(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            full_width: false,
            id: None,
            on_click: None,
            composed: OnceLock::new(),
        }
    }

    /// Set the visual variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stretch to the parent's full width
    pub fn w_full(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Assign a lookup id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the activation callback
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    /// Fill, label, and border colors for a variant
    fn variant_colors(&self) -> (Option<Color>, Color, Option<Color>) {
        let store = &self.store;
        match self.variant {
            ButtonVariant::Default => (
                Some(store.color(ColorToken::Primary)),
                store.color(ColorToken::PrimaryForeground),
                None,
            ),
            ButtonVariant::Secondary => (
                Some(store.color(ColorToken::Secondary)),
                store.color(ColorToken::SecondaryForeground),
                None,
            ),
            ButtonVariant::Destructive => (
                Some(store.color(ColorToken::Destructive)),
                store.color(ColorToken::DestructiveForeground),
                None,
            ),
            ButtonVariant::Outline => (
                Some(store.color(ColorToken::Background)),
                store.color(ColorToken::Foreground),
                Some(store.color(ColorToken::Border)),
            ),
            ButtonVariant::Ghost => (None, store.color(ColorToken::Foreground), None),
        }
    }

    fn compose(&self) -> Div {
        let store = &self.store;
        let (background, label_color, border) = self.variant_colors();

        let mut element = div()
            .h(self.size.height())
            .px(self.size.padding_x(store))
            .rounded(store.radius(RadiusToken::Md))
            .flex_row()
            .items_center()
            .justify_center()
            .class("button");

        if self.full_width {
            element = element.w_full();
        }
        if let Some(background) = background {
            element = element.bg(background);
        }
        if let Some(border_color) = border {
            element = element.border(1.0, border_color);
        }
        if self.disabled {
            element = element.opacity(store.opacity_value(OpacityToken::Disabled));
        } else if let Some(callback) = self.on_click.clone() {
            element = element.on_click(move |_| callback());
        }
        if let Some(id) = &self.id {
            element = element.id(id.clone());
        }

        element.child(
            text(&self.label)
                .size(self.size.font_size(store))
                .color(label_color),
        )
    }

    fn composed(&self) -> &Div {
        self.composed.get_or_init(|| self.compose())
    }
}

impl ElementBuilder for Button {
    fn build(&self, tree: &mut LayoutTree) -> LayoutNodeId {
        self.composed().build(tree)
    }

    fn render_props(&self) -> RenderProps {
        self.composed().render_props()
    }

    fn children_builders(&self) -> &[Box<dyn ElementBuilder>] {
        self.composed().children_builders()
    }

    fn identity(&self) -> ElementIdentity {
        self.composed().identity()
    }

    fn text_render_info(&self) -> Option<TextRenderInfo> {
        None
    }

    fn click_handler(&self) -> Option<ClickHandler> {
        self.composed().click_handler()
    }
}

/// Create a button bound to a theme store
pub fn button(store: &ThemeStore, label: impl Into<String>) -> Button {
    Button::new(store, label)
}
