//! Built-in theme presets inspired by shadcn base color presets.

use crate::scheme::ColorScheme;
use crate::theme::{Theme, ThemeBundle};
use crate::themes::LumoTheme;
use crate::tokens::*;
use lumo_core::Color;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Lumo brand theme.
    Lumo,
    /// shadcn-inspired neutral preset.
    Neutral,
    /// shadcn-inspired stone preset.
    Stone,
    /// shadcn-inspired slate preset.
    Slate,
    /// shadcn-inspired zinc preset.
    Zinc,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Lumo => "lumo",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
            Self::Slate => "slate",
            Self::Zinc => "zinc",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Lumo => "Lumo",
            Self::Neutral => "Neutral",
            Self::Stone => "Stone",
            Self::Slate => "Slate",
            Self::Zinc => "Zinc",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 5] = [
            ThemePreset::Lumo,
            ThemePreset::Neutral,
            ThemePreset::Stone,
            ThemePreset::Slate,
            ThemePreset::Zinc,
        ];
        &PRESETS
    }

    /// Build a light/dark theme bundle for this preset.
    pub fn bundle(self) -> ThemeBundle {
        match self {
            Self::Lumo => LumoTheme::bundle(),
            Self::Neutral => shadcn_bundle("Neutral", neutral_light(), neutral_dark()),
            Self::Stone => shadcn_bundle("Stone", stone_light(), stone_dark()),
            Self::Slate => shadcn_bundle("Slate", slate_light(), slate_dark()),
            Self::Zinc => shadcn_bundle("Zinc", zinc_light(), zinc_dark()),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for strings that name no preset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme preset: {0:?}")]
pub struct ParsePresetError(pub String);

impl FromStr for ThemePreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreset::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == s)
            .ok_or_else(|| ParsePresetError(s.to_string()))
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_bundle(preset: ThemePreset) -> ThemeBundle {
    preset.bundle()
}

#[derive(Clone, Copy)]
struct BasePalette {
    background: Color,
    foreground: Color,
    card: Color,
    primary: Color,
    primary_foreground: Color,
    secondary: Color,
    secondary_foreground: Color,
    muted: Color,
    muted_foreground: Color,
    accent: Color,
    accent_foreground: Color,
    destructive: Color,
    border: Color,
    ring: Color,
}

#[derive(Clone, Debug)]
struct PresetTheme {
    name: &'static str,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    shadows: ShadowTokens,
}

impl Theme for PresetTheme {
    fn name(&self) -> &str {
        self.name
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

fn shadcn_bundle(name: &'static str, light: BasePalette, dark: BasePalette) -> ThemeBundle {
    ThemeBundle::new(
        name,
        PresetTheme {
            name,
            scheme: ColorScheme::Light,
            colors: build_colors(light, ColorScheme::Light),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: shadcn_radii(),
            shadows: ShadowTokens::light(),
        },
        PresetTheme {
            name,
            scheme: ColorScheme::Dark,
            colors: build_colors(dark, ColorScheme::Dark),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: shadcn_radii(),
            shadows: ShadowTokens::dark(),
        },
    )
}

fn build_colors(base: BasePalette, scheme: ColorScheme) -> ColorTokens {
    let (primary_hover_mix, primary_active_mix, secondary_hover_mix, secondary_active_mix) =
        match scheme {
            ColorScheme::Light => (0.10, 0.20, 0.08, 0.16),
            ColorScheme::Dark => (0.06, 0.12, 0.06, 0.10),
        };
    let state_target = match scheme {
        ColorScheme::Light => Color::BLACK,
        ColorScheme::Dark => Color::WHITE,
    };

    let selection_alpha = match scheme {
        ColorScheme::Light => 0.22,
        ColorScheme::Dark => 0.28,
    };
    let success = match scheme {
        ColorScheme::Light => Color::from_hex(0x16A34A),
        ColorScheme::Dark => Color::from_hex(0x22C55E),
    };
    let warning = match scheme {
        ColorScheme::Light => Color::from_hex(0xD97706),
        ColorScheme::Dark => Color::from_hex(0xF59E0B),
    };

    ColorTokens {
        background: base.background,
        foreground: base.foreground,
        card: base.card,
        card_foreground: base.foreground,
        popover: base.card,
        popover_foreground: base.foreground,
        primary: base.primary,
        primary_foreground: base.primary_foreground,
        primary_hover: blend(base.primary, state_target, primary_hover_mix),
        primary_active: blend(base.primary, state_target, primary_active_mix),
        secondary: base.secondary,
        secondary_foreground: base.secondary_foreground,
        secondary_hover: blend(base.secondary, state_target, secondary_hover_mix),
        secondary_active: blend(base.secondary, state_target, secondary_active_mix),
        muted: base.muted,
        muted_foreground: base.muted_foreground,
        accent: base.accent,
        accent_foreground: base.accent_foreground,
        destructive: base.destructive,
        destructive_foreground: Color::from_hex(0xFAFAFA),
        success,
        warning,
        border: base.border,
        input: base.border,
        ring: base.ring,
        selection: base.primary.with_alpha(selection_alpha),
        selection_foreground: base.foreground,
        tooltip_bg: base.foreground,
        tooltip_text: base.background,
    }
}

fn shadcn_radii() -> RadiusTokens {
    RadiusTokens {
        radius_none: 0.0,
        radius_sm: 6.0,
        radius_default: 8.0,
        radius_md: 10.0,
        radius_lg: 14.0,
        radius_xl: 18.0,
        radius_2xl: 22.0,
        radius_3xl: 26.0,
        radius_full: 9999.0,
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t)
}

fn neutral_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x0A0A0A),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x171717),
        primary_foreground: Color::from_hex(0xFAFAFA),
        secondary: Color::from_hex(0xF5F5F5),
        secondary_foreground: Color::from_hex(0x171717),
        muted: Color::from_hex(0xF5F5F5),
        muted_foreground: Color::from_hex(0x737373),
        accent: Color::from_hex(0xF5F5F5),
        accent_foreground: Color::from_hex(0x171717),
        destructive: Color::from_hex(0xEF4444),
        border: Color::from_hex(0xE5E5E5),
        ring: Color::from_hex(0x0A0A0A),
    }
}

fn neutral_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0A0A0A),
        foreground: Color::from_hex(0xFAFAFA),
        card: Color::from_hex(0x0A0A0A),
        primary: Color::from_hex(0xFAFAFA),
        primary_foreground: Color::from_hex(0x171717),
        secondary: Color::from_hex(0x262626),
        secondary_foreground: Color::from_hex(0xFAFAFA),
        muted: Color::from_hex(0x262626),
        muted_foreground: Color::from_hex(0xA3A3A3),
        accent: Color::from_hex(0x262626),
        accent_foreground: Color::from_hex(0xFAFAFA),
        destructive: Color::from_hex(0x7F1D1D),
        border: Color::from_hex(0x262626),
        ring: Color::from_hex(0xD4D4D4),
    }
}

fn stone_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x0C0A09),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x1C1917),
        primary_foreground: Color::from_hex(0xFAFAF9),
        secondary: Color::from_hex(0xF5F5F4),
        secondary_foreground: Color::from_hex(0x1C1917),
        muted: Color::from_hex(0xF5F5F4),
        muted_foreground: Color::from_hex(0x78716C),
        accent: Color::from_hex(0xF5F5F4),
        accent_foreground: Color::from_hex(0x1C1917),
        destructive: Color::from_hex(0xEF4444),
        border: Color::from_hex(0xE7E5E4),
        ring: Color::from_hex(0x0C0A09),
    }
}

fn stone_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0C0A09),
        foreground: Color::from_hex(0xFAFAF9),
        card: Color::from_hex(0x0C0A09),
        primary: Color::from_hex(0xFAFAF9),
        primary_foreground: Color::from_hex(0x1C1917),
        secondary: Color::from_hex(0x292524),
        secondary_foreground: Color::from_hex(0xFAFAF9),
        muted: Color::from_hex(0x292524),
        muted_foreground: Color::from_hex(0xA8A29E),
        accent: Color::from_hex(0x292524),
        accent_foreground: Color::from_hex(0xFAFAF9),
        destructive: Color::from_hex(0x7F1D1D),
        border: Color::from_hex(0x292524),
        ring: Color::from_hex(0xD6D3D1),
    }
}

fn slate_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x020817),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x0F172A),
        primary_foreground: Color::from_hex(0xF8FAFC),
        secondary: Color::from_hex(0xF1F5F9),
        secondary_foreground: Color::from_hex(0x0F172A),
        muted: Color::from_hex(0xF1F5F9),
        muted_foreground: Color::from_hex(0x64748B),
        accent: Color::from_hex(0xF1F5F9),
        accent_foreground: Color::from_hex(0x0F172A),
        destructive: Color::from_hex(0xEF4444),
        border: Color::from_hex(0xE2E8F0),
        ring: Color::from_hex(0x020817),
    }
}

fn slate_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x020817),
        foreground: Color::from_hex(0xF8FAFC),
        card: Color::from_hex(0x020817),
        primary: Color::from_hex(0xF8FAFC),
        primary_foreground: Color::from_hex(0x0F172A),
        secondary: Color::from_hex(0x1E293B),
        secondary_foreground: Color::from_hex(0xF8FAFC),
        muted: Color::from_hex(0x1E293B),
        muted_foreground: Color::from_hex(0x94A3B8),
        accent: Color::from_hex(0x1E293B),
        accent_foreground: Color::from_hex(0xF8FAFC),
        destructive: Color::from_hex(0x7F1D1D),
        border: Color::from_hex(0x1E293B),
        ring: Color::from_hex(0xCBD5E1),
    }
}

fn zinc_light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        foreground: Color::from_hex(0x09090B),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x18181B),
        primary_foreground: Color::from_hex(0xFAFAFA),
        secondary: Color::from_hex(0xF4F4F5),
        secondary_foreground: Color::from_hex(0x18181B),
        muted: Color::from_hex(0xF4F4F5),
        muted_foreground: Color::from_hex(0x71717A),
        accent: Color::from_hex(0xF4F4F5),
        accent_foreground: Color::from_hex(0x18181B),
        destructive: Color::from_hex(0xEF4444),
        border: Color::from_hex(0xE4E4E7),
        ring: Color::from_hex(0x09090B),
    }
}

fn zinc_dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x09090B),
        foreground: Color::from_hex(0xFAFAFA),
        card: Color::from_hex(0x09090B),
        primary: Color::from_hex(0xFAFAFA),
        primary_foreground: Color::from_hex(0x18181B),
        secondary: Color::from_hex(0x27272A),
        secondary_foreground: Color::from_hex(0xFAFAFA),
        muted: Color::from_hex(0x27272A),
        muted_foreground: Color::from_hex(0xA1A1AA),
        accent: Color::from_hex(0x27272A),
        accent_foreground: Color::from_hex(0xFAFAFA),
        destructive: Color::from_hex(0x7F1D1D),
        border: Color::from_hex(0x27272A),
        ring: Color::from_hex(0xD4D4D8),
    }
}
