//! Opacity tokens for theming

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    Disabled,
    Hover,
    Overlay,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug)]
pub struct OpacityTokens {
    pub disabled: f32,
    pub hover: f32,
    pub overlay: f32,
}

impl OpacityTokens {
    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Disabled => self.disabled,
            OpacityToken::Hover => self.hover,
            OpacityToken::Overlay => self.overlay,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            disabled: 0.6,
            hover: 0.9,
            overlay: 0.8,
        }
    }
}
