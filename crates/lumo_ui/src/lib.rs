//! Lumo Component Library
//!
//! shadcn-style themed components built on `lumo_layout` primitives.
//! Every component takes a [`ThemeStore`](lumo_theme::ThemeStore) handle
//! at construction and reads its tokens from there; nothing in this crate
//! touches global state, so two stores on one screen style independently.
//!
//! # Example
//!
//! ```rust,ignore
//! use lumo_ui::prelude::*;
//!
//! fn build_ui(store: &ThemeStore) -> impl ElementBuilder {
//!     div()
//!         .flex_col()
//!         .gap(16.0)
//!         .child(heading(store, "Welcome"))
//!         .child(
//!             card(store).child(
//!                 button(store, "Click me!").on_click(|| println!("clicked")),
//!             ),
//!         )
//!         .child(theme_toggle(store))
//! }
//! ```

pub mod components;

pub use components::*;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::components::{
        body, button, card, card_content, card_description, card_header, card_title, heading,
        muted, subheading, theme_toggle, Button, ButtonSize, ButtonVariant, Card, ThemeToggle,
    };

    pub use lumo_layout::prelude::*;
    pub use lumo_theme::{ColorScheme, ColorToken, ThemePreference, ThemeStore};
}
