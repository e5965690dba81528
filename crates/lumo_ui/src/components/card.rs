//! Card component and its section helpers
//!
//! A bordered surface with the usual shadcn sections: header, title,
//! description, content.
//!
//! # Example
//!
//! ```ignore
//! use lumo_ui::prelude::*;
//!
//! card(&store)
//!     .child(
//!         card_header(&store)
//!             .child(card_title(&store, "Getting Started"))
//!             .child(card_description(&store, "Edit src to begin")),
//!     )
//!     .child(card_content(&store).child(button(&store, "Click me!")))
//! ```

use std::sync::OnceLock;

use lumo_layout::div::{div, ClickHandler, Div, ElementBuilder, ElementIdentity, TextRenderInfo};
use lumo_layout::element::RenderProps;
use lumo_layout::text::{text, Text};
use lumo_layout::tree::{LayoutNodeId, LayoutTree};
use lumo_theme::{ColorToken, FontSizeToken, RadiusToken, ShadowToken, SpacingToken, ThemeStore};

/// Card component
pub struct Card {
    store: ThemeStore,
    id: Option<String>,
    children: Vec<Box<dyn ElementBuilder>>,
    composed: OnceLock<Div>,
}

impl Card {
    pub fn new(store: &ThemeStore) -> Self {
        Self {
            store: store.clone(),
            id: None,
            children: Vec::new(),
            composed: OnceLock::new(),
        }
    }

    /// Assign a lookup id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a section or arbitrary child
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    fn compose(&self) -> Div {
        let store = &self.store;
        let mut element = div()
            .flex_col()
            .gap(store.spacing_value(SpacingToken::Space4))
            .p(store.spacing_value(SpacingToken::Space6))
            .bg(store.color(ColorToken::Card))
            .border(1.0, store.color(ColorToken::Border))
            .rounded(store.radius(RadiusToken::Lg))
            .shadow(store.shadow(ShadowToken::Sm))
            .class("card");

        if let Some(id) = &self.id {
            element = element.id(id.clone());
        }
        element
    }

    fn composed(&self) -> &Div {
        self.composed.get_or_init(|| self.compose())
    }
}

impl ElementBuilder for Card {
    fn build(&self, tree: &mut LayoutTree) -> LayoutNodeId {
        self.composed().build(tree)
    }

    fn render_props(&self) -> RenderProps {
        self.composed().render_props()
    }

    fn children_builders(&self) -> &[Box<dyn ElementBuilder>] {
        &self.children
    }

    fn identity(&self) -> ElementIdentity {
        self.composed().identity()
    }

    fn text_render_info(&self) -> Option<TextRenderInfo> {
        None
    }

    fn click_handler(&self) -> Option<ClickHandler> {
        None
    }
}

/// Create a card bound to a theme store
pub fn card(store: &ThemeStore) -> Card {
    Card::new(store)
}

/// Header section: a tight column at the top of a card
pub fn card_header(store: &ThemeStore) -> Div {
    div()
        .flex_col()
        .gap(store.spacing_value(SpacingToken::Space1))
        .class("card-header")
}

/// Title text styled for a card header
pub fn card_title(store: &ThemeStore, content: impl Into<String>) -> Text {
    text(content)
        .size(store.font_size(FontSizeToken::Lg))
        .color(store.color(ColorToken::CardForeground))
}

/// Muted descriptive text under the title
pub fn card_description(store: &ThemeStore, content: impl Into<String>) -> Text {
    text(content)
        .size(store.font_size(FontSizeToken::Sm))
        .color(store.color(ColorToken::MutedForeground))
}

/// Content section holding the card body
pub fn card_content(store: &ThemeStore) -> Div {
    div()
        .flex_col()
        .gap(store.spacing_value(SpacingToken::Space3))
        .class("card-content")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_layout::registry::ElementRegistry;
    use lumo_layout::ui_tree::UiTree;

    #[test]
    fn card_composes_its_sections() {
        let store = ThemeStore::default();
        let registry = ElementRegistry::new();

        let ui = card(&store)
            .id("welcome-card")
            .child(
                card_header(&store)
                    .child(card_title(&store, "Getting Started").id("card-title"))
                    .child(card_description(&store, "Edit the sources to begin")),
            )
            .child(card_content(&store).child(text("Body").id("card-body")));

        let mut tree = UiTree::from_element(&ui, &registry);
        tree.compute_layout(400.0, 300.0);

        assert!(registry.has_class("welcome-card", "card"));
        assert_eq!(
            registry.text_of("card-title").as_deref(),
            Some("Getting Started")
        );
        assert_eq!(registry.text_of("card-body").as_deref(), Some("Body"));
    }

    #[test]
    fn card_surface_uses_card_tokens() {
        let store = ThemeStore::default();
        let element = card(&store);
        let props = element.render_props();
        assert_eq!(props.background, Some(store.color(ColorToken::Card)));
        assert!(props.shadow.is_some());
    }
}
