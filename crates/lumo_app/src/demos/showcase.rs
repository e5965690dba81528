//! Showcase screen
//!
//! The default screen of `lumo-demo`: a welcome header with a theme
//! toggle, and a getting-started card with a call-to-action button.
//! Everything is themed through the store, so toggling the scheme
//! restyles the whole screen on the next frame.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use lumo_layout::{div, Div};
use lumo_theme::{ColorToken, SpacingToken, ThemeStore};
use lumo_ui::{
    button, card, card_content, card_description, card_header, card_title, heading, subheading,
    theme_toggle,
};

use crate::context::{ViewFn, ROOT_ELEMENT_ID};

pub const HEADER_ID: &str = "header";
pub const BRAND_ID: &str = "brand";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const WELCOME_HEADING_ID: &str = "welcome-heading";
pub const CARD_ID: &str = "getting-started";
pub const CARD_TITLE_ID: &str = "getting-started-title";
pub const CARD_DESCRIPTION_ID: &str = "getting-started-description";
pub const CTA_BUTTON_ID: &str = "cta-button";

const CARD_WIDTH: f32 = 420.0;

/// Handle to the showcase screen and its click counter
///
/// The counter lives outside the view function, so it survives theme
/// rebuilds.
pub struct ShowcaseDemo {
    clicks: Arc<AtomicU32>,
}

impl ShowcaseDemo {
    pub fn new() -> Self {
        Self {
            clicks: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Times the call-to-action button has been clicked
    pub fn clicks(&self) -> u32 {
        self.clicks.load(Ordering::Relaxed)
    }

    /// View function for an [`AppContext`](crate::context::AppContext)
    pub fn view(&self) -> ViewFn {
        let clicks = self.clicks.clone();
        Arc::new(move |store| build_screen(store, &clicks))
    }
}

impl Default for ShowcaseDemo {
    fn default() -> Self {
        Self::new()
    }
}

/// Showcase view for callers that do not need the click counter
pub fn showcase_view() -> ViewFn {
    ShowcaseDemo::new().view()
}

fn build_screen(store: &ThemeStore, clicks: &Arc<AtomicU32>) -> Div {
    div()
        .id(ROOT_ELEMENT_ID)
        .class("app")
        .w_full()
        .h_full()
        .flex_col()
        .items_center()
        .gap(store.spacing_value(SpacingToken::Space8))
        .p(store.spacing_value(SpacingToken::Space8))
        .bg(store.color(ColorToken::Background))
        .child(header(store))
        .child(heading(store, "Welcome to Lumo").id(WELCOME_HEADING_ID))
        .child(getting_started(store, clicks))
}

fn header(store: &ThemeStore) -> Div {
    div()
        .id(HEADER_ID)
        .w_full()
        .flex_row()
        .items_center()
        .justify_between()
        .child(subheading(store, "Lumo").id(BRAND_ID))
        .child(theme_toggle(store).id(THEME_TOGGLE_ID))
}

fn getting_started(store: &ThemeStore, clicks: &Arc<AtomicU32>) -> Div {
    let counter = clicks.clone();

    // Fixed-width column so the card stretches to the column, not the
    // viewport.
    div().w(CARD_WIDTH).flex_col().child(
        card(store)
            .id(CARD_ID)
            .child(
                card_header(store)
                    .child(card_title(store, "Getting Started").id(CARD_TITLE_ID))
                    .child(
                        card_description(store, "Your themed Lumo application is ready!")
                            .id(CARD_DESCRIPTION_ID),
                    ),
            )
            .child(
                card_content(store).child(
                    button(store, "Click me!")
                        .id(CTA_BUTTON_ID)
                        .w_full()
                        .on_click(move || {
                            let total = counter.fetch_add(1, Ordering::Relaxed) + 1;
                            tracing::info!("Showcase - call to action clicked ({total} total)");
                        }),
                ),
            ),
    )
}
