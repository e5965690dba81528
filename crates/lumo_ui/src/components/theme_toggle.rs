//! Theme toggle component
//!
//! An outline icon button that flips between light and dark. It holds no
//! scheme state of its own: the glyph comes from the store's resolved
//! scheme at build time, and activation asks the store for the concrete
//! opposite. Toggling from a `system` preference therefore commits an
//! explicit choice and the button never cycles back to `system` itself.
//!
//! # Example
//!
//! ```ignore
//! use lumo_ui::prelude::*;
//!
//! theme_toggle(&store).id("theme-toggle")
//! ```

use std::sync::OnceLock;

use lumo_layout::div::{div, ClickHandler, Div, ElementBuilder, ElementIdentity, TextRenderInfo};
use lumo_layout::element::RenderProps;
use lumo_layout::text::text;
use lumo_layout::tree::{LayoutNodeId, LayoutTree};
use lumo_theme::{ColorScheme, ColorToken, RadiusToken, ThemeStore};

const SUN_GLYPH: &str = "\u{2600}";
const MOON_GLYPH: &str = "\u{263E}";

/// Square side of the toggle button, px
const TOGGLE_SIZE: f32 = 36.0;

/// Theme toggle component
pub struct ThemeToggle {
    store: ThemeStore,
    id: Option<String>,
    composed: OnceLock<Div>,
}

impl ThemeToggle {
    pub fn new(store: &ThemeStore) -> Self {
        Self {
            store: store.clone(),
            id: None,
            composed: OnceLock::new(),
        }
    }

    /// Assign a lookup id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Glyph for the scheme the toggle currently shows
    pub fn glyph_for(scheme: ColorScheme) -> &'static str {
        match scheme {
            ColorScheme::Light => SUN_GLYPH,
            ColorScheme::Dark => MOON_GLYPH,
        }
    }

    fn compose(&self) -> Div {
        let store = &self.store;
        let resolved = store.resolved_scheme();

        let mut element = div()
            .square(TOGGLE_SIZE)
            .rounded(store.radius(RadiusToken::Md))
            .bg(store.color(ColorToken::Background))
            .border(1.0, store.color(ColorToken::Border))
            .items_center()
            .justify_center()
            .class("theme-toggle");

        if let Some(id) = &self.id {
            element = element.id(id.clone());
        }

        let click_store = store.clone();
        element
            .on_click(move |_| {
                tracing::debug!(
                    "ThemeToggle - activated with resolved {:?}",
                    click_store.resolved_scheme()
                );
                click_store.toggle_preference();
            })
            .child(
                text(Self::glyph_for(resolved))
                    .size(16.0)
                    .color(store.color(ColorToken::Foreground)),
            )
    }

    fn composed(&self) -> &Div {
        self.composed.get_or_init(|| self.compose())
    }
}

impl ElementBuilder for ThemeToggle {
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

/// Create a theme toggle bound to a theme store
pub fn theme_toggle(store: &ThemeStore) -> ThemeToggle {
    ThemeToggle::new(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_layout::registry::ElementRegistry;
    use lumo_layout::ui_tree::UiTree;
    use lumo_theme::{ThemePreference, ThemeStoreConfig};

    fn store_with(default: ThemePreference, system: ColorScheme) -> ThemeStore {
        ThemeStore::new(ThemeStoreConfig {
            default_preference: default,
            system_scheme: system,
            ..Default::default()
        })
    }

    #[test]
    fn glyph_tracks_the_resolved_scheme() {
        assert_eq!(ThemeToggle::glyph_for(ColorScheme::Light), SUN_GLYPH);
        assert_eq!(ThemeToggle::glyph_for(ColorScheme::Dark), MOON_GLYPH);
    }

    #[test]
    fn activation_commits_the_concrete_opposite() {
        let store = store_with(ThemePreference::System, ColorScheme::Dark);
        let registry = ElementRegistry::new();

        let ui = theme_toggle(&store).id("toggle");
        let mut tree = UiTree::from_element(&ui, &registry);
        tree.compute_layout(100.0, 100.0);

        assert!(tree.click(5.0, 5.0));
        assert_eq!(store.preference(), ThemePreference::Light);
        assert_eq!(store.resolved_scheme(), ColorScheme::Light);
    }

    #[test]
    fn repeated_activation_alternates_concrete_schemes() {
        let store = store_with(ThemePreference::Light, ColorScheme::Light);
        let registry = ElementRegistry::new();

        for expected in [
            ThemePreference::Dark,
            ThemePreference::Light,
            ThemePreference::Dark,
        ] {
            let ui = theme_toggle(&store);
            let mut tree = UiTree::from_element(&ui, &registry);
            tree.compute_layout(100.0, 100.0);
            tree.click(5.0, 5.0);
            assert_eq!(store.preference(), expected);
        }
    }
}
