//! Theme trait and light/dark bundles

use crate::scheme::ColorScheme;
use crate::tokens::{ColorTokens, RadiusTokens, ShadowTokens, SpacingTokens, TypographyTokens};
use std::sync::Arc;

/// Named access to the token tables of one color scheme
pub trait Theme: Send + Sync {
    /// Human-readable theme name
    fn name(&self) -> &str;

    /// The scheme this variant renders
    fn color_scheme(&self) -> ColorScheme;

    fn colors(&self) -> &ColorTokens;
    fn typography(&self) -> &TypographyTokens;
    fn spacing(&self) -> &SpacingTokens;
    fn radii(&self) -> &RadiusTokens;
    fn shadows(&self) -> &ShadowTokens;
}

/// A named light/dark theme pair
///
/// The bundle is what gets installed into a store; the store picks the
/// variant matching the resolved scheme.
#[derive(Clone)]
pub struct ThemeBundle {
    name: String,
    light: Arc<dyn Theme>,
    dark: Arc<dyn Theme>,
}

impl ThemeBundle {
    pub fn new(
        name: impl Into<String>,
        light: impl Theme + 'static,
        dark: impl Theme + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme variant for a resolved scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &dyn Theme {
        match scheme {
            ColorScheme::Light => self.light.as_ref(),
            ColorScheme::Dark => self.dark.as_ref(),
        }
    }
}

impl std::fmt::Debug for ThemeBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeBundle")
            .field("name", &self.name)
            .finish()
    }
}
