//! Lumo Theme System
//!
//! A theming system with design tokens, a persisted light/dark/system
//! preference, and OS color scheme detection.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: Colors, typography, spacing, radii, shadows, opacities
//! - **Preference store**: Scoped light/dark/system state with best-effort persistence
//! - **Color scheme detection**: Automatic detection of system dark/light mode
//! - **Presets**: Built-in bundles selectable by id
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumo_theme::{ColorToken, ThemePreference, ThemeStore, ThemeStoreConfig};
//!
//! // One store per UI root; handles are cheap clones
//! let store = ThemeStore::new(ThemeStoreConfig::default());
//!
//! // Access tokens from the active table
//! let primary = store.color(ColorToken::Primary);
//! let spacing = store.spacing();
//!
//! // User picked an explicit scheme
//! store.set_preference(ThemePreference::Dark);
//! ```
//!
//! # Architecture
//!
//! A [`ThemeStore`] holds one UI root's theme state. Nothing here is
//! global: tests and nested roots construct their own stores and they do
//! not observe each other.
//!
//! - **Preference**: the stored intent (`light`, `dark`, or `system`)
//! - **Resolved scheme**: always concrete; equals the preference when it
//!   is concrete, otherwise the latest OS signal
//! - **Token tables**: swapped atomically whenever resolution changes
//!
//! The OS scheme arrives through a [`SchemeSignal`]. [`ThemeStore::watch`]
//! connects a store to a signal and returns a subscription guard; dropping
//! or releasing the guard detaches the store exactly once.
//!
//! # Tokens
//!
//! Tokens are the atomic values that make up the design system:
//!
//! - [`ColorTokens`]: Semantic colors (primary, destructive, background, etc.)
//! - [`TypographyTokens`]: Font families, sizes, weights, line heights
//! - [`SpacingTokens`]: 4px-based spacing scale
//! - [`RadiusTokens`]: Border radii
//! - [`ShadowTokens`]: Box shadows
//! - [`OpacityTokens`]: Disabled/hover/overlay levels
//!
//! # Themes
//!
//! Built-in themes:
//!
//! - [`LumoTheme`]: Default brand theme with light and dark variants
//! - [`ThemePreset`]: Neutral, stone, slate, and zinc bundles in the
//!   shadcn base-color tradition

pub mod platform;
pub mod preference;
pub mod presets;
pub mod scheme;
pub mod signal;
pub mod storage;
pub mod store;
pub mod theme;
pub mod themes;
pub mod tokens;

#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export commonly used types
pub use platform::detect_system_color_scheme;
pub use preference::{ParsePreferenceError, ThemePreference};
pub use presets::{preset_bundle, ParsePresetError, ThemePreset};
pub use scheme::{ColorScheme, ParseSchemeError};
pub use signal::{SchemeSignal, SchemeSubscription};
pub use storage::PreferenceStore;
pub use store::{SchemeMarker, ThemeChange, ThemeListener, ThemeStore, ThemeStoreConfig};
pub use theme::{Theme, ThemeBundle};
pub use themes::LumoTheme;
pub use tokens::*;

#[cfg(feature = "watcher")]
pub use watcher::{SystemSchemeWatcher, WatcherConfig};
