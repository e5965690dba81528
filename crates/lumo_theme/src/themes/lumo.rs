//! Default Lumo brand theme
//!
//! Built around the product palette: lochmara blue as the primary brand
//! color, clementine orange as the secondary, with vida-loca green,
//! buttercup yellow, and ecstasy orange carrying the status roles. The
//! dark variant keeps the brand hues and swaps the neutral surfaces for
//! a zinc gray ramp.

use crate::scheme::ColorScheme;
use crate::theme::{Theme, ThemeBundle};
use crate::tokens::*;
use lumo_core::Color;

/// Brand palette
pub mod palette {
    use lumo_core::Color;

    // Brand colors
    pub const LOCHMARA: Color = Color::rgb(0.0 / 255.0, 150.0 / 255.0, 219.0 / 255.0);
    pub const CLEMENTINE: Color = Color::rgb(221.0 / 255.0, 96.0 / 255.0, 0.0 / 255.0);
    pub const VIDA_LOCA: Color = Color::rgb(102.0 / 255.0, 188.0 / 255.0, 41.0 / 255.0);
    pub const BUTTERCUP: Color = Color::rgb(245.0 / 255.0, 179.0 / 255.0, 36.0 / 255.0);
    pub const ECSTASY: Color = Color::rgb(246.0 / 255.0, 140.0 / 255.0, 35.0 / 255.0);
    pub const SHUTTLE_GRAY: Color = Color::rgb(84.0 / 255.0, 86.0 / 255.0, 91.0 / 255.0);

    // Neutral grays
    pub const GRAY: Color = Color::rgb(99.0 / 255.0, 100.0 / 255.0, 102.0 / 255.0);
    pub const GRAY_DARK: Color = Color::rgb(77.0 / 255.0, 77.0 / 255.0, 77.0 / 255.0);
    pub const GRAY_LIGHT: Color = Color::rgb(230.0 / 255.0, 231.0 / 255.0, 232.0 / 255.0);

    // Dark surface ramp (zinc)
    pub const ZINC_950: Color = Color::rgb(9.0 / 255.0, 9.0 / 255.0, 11.0 / 255.0);
    pub const ZINC_900: Color = Color::rgb(24.0 / 255.0, 24.0 / 255.0, 27.0 / 255.0);
    pub const ZINC_800: Color = Color::rgb(39.0 / 255.0, 39.0 / 255.0, 42.0 / 255.0);
    pub const ZINC_700: Color = Color::rgb(63.0 / 255.0, 63.0 / 255.0, 70.0 / 255.0);
    pub const ZINC_400: Color = Color::rgb(161.0 / 255.0, 161.0 / 255.0, 170.0 / 255.0);
    pub const ZINC_200: Color = Color::rgb(228.0 / 255.0, 228.0 / 255.0, 231.0 / 255.0);
    pub const ZINC_50: Color = Color::rgb(250.0 / 255.0, 250.0 / 255.0, 250.0 / 255.0);
}

/// Default Lumo theme built from the brand palette
#[derive(Clone, Debug)]
pub struct LumoTheme {
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    shadows: ShadowTokens,
}

impl LumoTheme {
    /// Create the light variant
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                background: Color::WHITE,
                foreground: palette::SHUTTLE_GRAY,
                card: Color::WHITE,
                card_foreground: palette::SHUTTLE_GRAY,
                popover: Color::WHITE,
                popover_foreground: palette::SHUTTLE_GRAY,
                primary: palette::LOCHMARA,
                primary_foreground: Color::WHITE,
                primary_hover: Color::from_hex(0x0087C5),
                primary_active: Color::from_hex(0x0078AF),
                secondary: palette::CLEMENTINE,
                secondary_foreground: Color::WHITE,
                secondary_hover: Color::from_hex(0xC75600),
                secondary_active: Color::from_hex(0xB14D00),
                muted: palette::GRAY_LIGHT,
                muted_foreground: palette::GRAY,
                accent: palette::VIDA_LOCA,
                accent_foreground: Color::WHITE,
                destructive: palette::ECSTASY,
                destructive_foreground: Color::WHITE,
                success: palette::VIDA_LOCA,
                warning: palette::BUTTERCUP,
                border: palette::GRAY_LIGHT,
                input: palette::GRAY_LIGHT,
                ring: palette::LOCHMARA,
                selection: palette::LOCHMARA.with_alpha(0.25),
                selection_foreground: palette::SHUTTLE_GRAY,
                // Tooltip (inverted for light theme)
                tooltip_bg: Color::from_hex(0x2B2C2E),
                tooltip_text: Color::from_hex(0xF5F5F5),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::light(),
        }
    }

    /// Create the dark variant
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                background: palette::ZINC_900,
                foreground: palette::ZINC_50,
                card: Color::from_hex(0x1F1F23),
                card_foreground: palette::ZINC_50,
                popover: Color::from_hex(0x1F1F23),
                popover_foreground: palette::ZINC_50,
                primary: palette::LOCHMARA,
                primary_foreground: Color::WHITE,
                primary_hover: Color::from_hex(0x29A9E3),
                primary_active: Color::from_hex(0x47B6E9),
                secondary: palette::CLEMENTINE,
                secondary_foreground: Color::WHITE,
                secondary_hover: Color::from_hex(0xE9731A),
                secondary_active: Color::from_hex(0xF08634),
                muted: palette::ZINC_800,
                muted_foreground: palette::ZINC_400,
                accent: palette::VIDA_LOCA,
                accent_foreground: Color::WHITE,
                destructive: palette::ECSTASY,
                destructive_foreground: Color::WHITE,
                success: palette::VIDA_LOCA,
                warning: palette::BUTTERCUP,
                border: palette::ZINC_800,
                input: palette::ZINC_800,
                ring: palette::LOCHMARA,
                selection: palette::LOCHMARA.with_alpha(0.35),
                selection_foreground: palette::ZINC_50,
                // Tooltip (inverted for dark theme)
                tooltip_bg: palette::ZINC_200,
                tooltip_text: palette::ZINC_900,
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::dark(),
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Lumo", Self::light(), Self::dark())
    }
}

impl Theme for LumoTheme {
    fn name(&self) -> &str {
        "Lumo"
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }
}
