//! Themed components

pub mod button;
pub mod card;
pub mod text;
pub mod theme_toggle;

pub use button::{button, Button, ButtonSize, ButtonVariant};
pub use card::{card, card_content, card_description, card_header, card_title, Card};
pub use text::{body, heading, muted, subheading};
pub use theme_toggle::{theme_toggle, ThemeToggle};
