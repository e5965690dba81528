//! Color tokens for theming

use lumo_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Surface colors
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,

    // Brand colors
    Primary,
    PrimaryForeground,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryForeground,
    SecondaryHover,
    SecondaryActive,

    // Muted and accent colors
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,

    // Status colors
    Destructive,
    DestructiveForeground,
    Success,
    Warning,

    // Border and input colors
    Border,
    Input,
    Ring,

    // Selection colors
    Selection,
    SelectionForeground,

    // Tooltip colors (inverted colors)
    TooltipBackground,
    TooltipForeground,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug)]
pub struct ColorTokens {
    // Surface colors
    pub background: Color,
    pub foreground: Color,
    pub card: Color,
    pub card_foreground: Color,
    pub popover: Color,
    pub popover_foreground: Color,

    // Brand colors
    pub primary: Color,
    pub primary_foreground: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub secondary_foreground: Color,
    pub secondary_hover: Color,
    pub secondary_active: Color,

    // Muted and accent colors
    pub muted: Color,
    pub muted_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,

    // Status colors
    pub destructive: Color,
    pub destructive_foreground: Color,
    pub success: Color,
    pub warning: Color,

    // Border and input colors
    pub border: Color,
    pub input: Color,
    pub ring: Color,

    // Selection colors
    pub selection: Color,
    pub selection_foreground: Color,

    // Tooltip colors (inverted colors)
    pub tooltip_bg: Color,
    pub tooltip_text: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Foreground => self.foreground,
            ColorToken::Card => self.card,
            ColorToken::CardForeground => self.card_foreground,
            ColorToken::Popover => self.popover,
            ColorToken::PopoverForeground => self.popover_foreground,
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryForeground => self.primary_foreground,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::PrimaryActive => self.primary_active,
            ColorToken::Secondary => self.secondary,
            ColorToken::SecondaryForeground => self.secondary_foreground,
            ColorToken::SecondaryHover => self.secondary_hover,
            ColorToken::SecondaryActive => self.secondary_active,
            ColorToken::Muted => self.muted,
            ColorToken::MutedForeground => self.muted_foreground,
            ColorToken::Accent => self.accent,
            ColorToken::AccentForeground => self.accent_foreground,
            ColorToken::Destructive => self.destructive,
            ColorToken::DestructiveForeground => self.destructive_foreground,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Border => self.border,
            ColorToken::Input => self.input,
            ColorToken::Ring => self.ring,
            ColorToken::Selection => self.selection,
            ColorToken::SelectionForeground => self.selection_foreground,
            ColorToken::TooltipBackground => self.tooltip_bg,
            ColorToken::TooltipForeground => self.tooltip_text,
        }
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            background: Color::lerp(&from.background, &to.background, t),
            foreground: Color::lerp(&from.foreground, &to.foreground, t),
            card: Color::lerp(&from.card, &to.card, t),
            card_foreground: Color::lerp(&from.card_foreground, &to.card_foreground, t),
            popover: Color::lerp(&from.popover, &to.popover, t),
            popover_foreground: Color::lerp(&from.popover_foreground, &to.popover_foreground, t),
            primary: Color::lerp(&from.primary, &to.primary, t),
            primary_foreground: Color::lerp(&from.primary_foreground, &to.primary_foreground, t),
            primary_hover: Color::lerp(&from.primary_hover, &to.primary_hover, t),
            primary_active: Color::lerp(&from.primary_active, &to.primary_active, t),
            secondary: Color::lerp(&from.secondary, &to.secondary, t),
            secondary_foreground: Color::lerp(
                &from.secondary_foreground,
                &to.secondary_foreground,
                t,
            ),
            secondary_hover: Color::lerp(&from.secondary_hover, &to.secondary_hover, t),
            secondary_active: Color::lerp(&from.secondary_active, &to.secondary_active, t),
            muted: Color::lerp(&from.muted, &to.muted, t),
            muted_foreground: Color::lerp(&from.muted_foreground, &to.muted_foreground, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            accent_foreground: Color::lerp(&from.accent_foreground, &to.accent_foreground, t),
            destructive: Color::lerp(&from.destructive, &to.destructive, t),
            destructive_foreground: Color::lerp(
                &from.destructive_foreground,
                &to.destructive_foreground,
                t,
            ),
            success: Color::lerp(&from.success, &to.success, t),
            warning: Color::lerp(&from.warning, &to.warning, t),
            border: Color::lerp(&from.border, &to.border, t),
            input: Color::lerp(&from.input, &to.input, t),
            ring: Color::lerp(&from.ring, &to.ring, t),
            selection: Color::lerp(&from.selection, &to.selection, t),
            selection_foreground: Color::lerp(
                &from.selection_foreground,
                &to.selection_foreground,
                t,
            ),
            tooltip_bg: Color::lerp(&from.tooltip_bg, &to.tooltip_bg, t),
            tooltip_text: Color::lerp(&from.tooltip_text, &to.tooltip_text, t),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Default to the light brand palette
        Self {
            background: Color::WHITE,
            foreground: Color::from_hex(0x54565B),
            card: Color::WHITE,
            card_foreground: Color::from_hex(0x54565B),
            popover: Color::WHITE,
            popover_foreground: Color::from_hex(0x54565B),
            primary: Color::from_hex(0x0096DB),
            primary_foreground: Color::WHITE,
            primary_hover: Color::from_hex(0x0087C5),
            primary_active: Color::from_hex(0x0078AF),
            secondary: Color::from_hex(0xDD6000),
            secondary_foreground: Color::WHITE,
            secondary_hover: Color::from_hex(0xC75600),
            secondary_active: Color::from_hex(0xB14D00),
            muted: Color::from_hex(0xE6E7E8),
            muted_foreground: Color::from_hex(0x636466),
            accent: Color::from_hex(0x66BC29),
            accent_foreground: Color::WHITE,
            destructive: Color::from_hex(0xF68C23),
            destructive_foreground: Color::WHITE,
            success: Color::from_hex(0x66BC29),
            warning: Color::from_hex(0xF5B324),
            border: Color::from_hex(0xE6E7E8),
            input: Color::from_hex(0xE6E7E8),
            ring: Color::from_hex(0x0096DB),
            selection: Color::from_hex(0x0096DB).with_alpha(0.25),
            selection_foreground: Color::from_hex(0x54565B),
            tooltip_bg: Color::from_hex(0x2B2C2E), // Dark bg for light theme
            tooltip_text: Color::from_hex(0xF5F5F5), // Light text for dark bg
        }
    }
}
