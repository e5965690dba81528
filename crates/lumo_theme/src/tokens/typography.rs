//! Typography tokens for theming

/// Font family with fallback stack
#[derive(Clone, Debug, PartialEq)]
pub struct FontFamily {
    pub primary: String,
    pub fallbacks: Vec<String>,
}

impl FontFamily {
    pub fn new(primary: &str, fallbacks: Vec<&str>) -> Self {
        Self {
            primary: primary.to_string(),
            fallbacks: fallbacks.into_iter().map(String::from).collect(),
        }
    }

    /// The full stack, primary first
    pub fn stack(&self) -> Vec<&str> {
        std::iter::once(self.primary.as_str())
            .chain(self.fallbacks.iter().map(String::as_str))
            .collect()
    }
}

/// Font size token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Xxxxl,
    Xxxxxl,
}

/// Complete set of typography tokens
#[derive(Clone, Debug)]
pub struct TypographyTokens {
    pub font_sans: FontFamily,
    pub font_serif: FontFamily,
    pub font_mono: FontFamily,

    // Size scale (px)
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,
    pub text_2xl: f32,
    pub text_3xl: f32,
    pub text_4xl: f32,
    pub text_5xl: f32,

    // Weights
    pub weight_normal: u16,
    pub weight_medium: u16,
    pub weight_semibold: u16,
    pub weight_bold: u16,

    // Line heights (multipliers)
    pub line_tight: f32,
    pub line_normal: f32,
    pub line_relaxed: f32,
}

impl TypographyTokens {
    /// Get a font size by token key
    pub fn size(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Xs => self.text_xs,
            FontSizeToken::Sm => self.text_sm,
            FontSizeToken::Base => self.text_base,
            FontSizeToken::Lg => self.text_lg,
            FontSizeToken::Xl => self.text_xl,
            FontSizeToken::Xxl => self.text_2xl,
            FontSizeToken::Xxxl => self.text_3xl,
            FontSizeToken::Xxxxl => self.text_4xl,
            FontSizeToken::Xxxxxl => self.text_5xl,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_sans: FontFamily::new(
                "Inter",
                vec!["Segoe UI", "Helvetica Neue", "system-ui", "sans-serif"],
            ),
            font_serif: FontFamily::new("Georgia", vec!["Times New Roman", "serif"]),
            font_mono: FontFamily::new(
                "JetBrains Mono",
                vec!["SF Mono", "Consolas", "monospace"],
            ),
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
            text_2xl: 24.0,
            text_3xl: 30.0,
            text_4xl: 36.0,
            text_5xl: 48.0,
            weight_normal: 400,
            weight_medium: 500,
            weight_semibold: 600,
            weight_bold: 700,
            line_tight: 1.25,
            line_normal: 1.5,
            line_relaxed: 1.75,
        }
    }
}
