//! Themed text helpers
//!
//! Convenience constructors that pick size and color from the store's
//! active tables. They return plain [`Text`] builders, so every text
//! method chains afterwards.

use lumo_layout::text::{text, Text};
use lumo_theme::{ColorToken, FontSizeToken, ThemeStore};

/// Page-level heading
pub fn heading(store: &ThemeStore, content: impl Into<String>) -> Text {
    text(content)
        .size(store.font_size(FontSizeToken::Xxxxl))
        .color(store.color(ColorToken::Foreground))
}

/// Section heading
pub fn subheading(store: &ThemeStore, content: impl Into<String>) -> Text {
    text(content)
        .size(store.font_size(FontSizeToken::Xl))
        .color(store.color(ColorToken::Foreground))
}

/// Body copy
pub fn body(store: &ThemeStore, content: impl Into<String>) -> Text {
    text(content)
        .size(store.font_size(FontSizeToken::Base))
        .color(store.color(ColorToken::Foreground))
}

/// De-emphasized supporting text
pub fn muted(store: &ThemeStore, content: impl Into<String>) -> Text {
    text(content)
        .size(store.font_size(FontSizeToken::Sm))
        .color(store.color(ColorToken::MutedForeground))
}
