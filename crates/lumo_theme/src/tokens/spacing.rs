//! Spacing tokens for theming

/// Spacing token keys (multiples of the base unit)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Space1,
    Space2,
    Space3,
    Space4,
    Space5,
    Space6,
    Space8,
    Space10,
    Space12,
    Space16,
}

/// Complete spacing scale derived from a base unit
#[derive(Clone, Debug)]
pub struct SpacingTokens {
    pub base: f32,
    pub space_1: f32,
    pub space_2: f32,
    pub space_3: f32,
    pub space_4: f32,
    pub space_5: f32,
    pub space_6: f32,
    pub space_8: f32,
    pub space_10: f32,
    pub space_12: f32,
    pub space_16: f32,
}

impl SpacingTokens {
    /// Build the scale from a base unit (space_1 = base, space_N = N * base)
    pub fn with_base(base: f32) -> Self {
        Self {
            base,
            space_1: base,
            space_2: base * 2.0,
            space_3: base * 3.0,
            space_4: base * 4.0,
            space_5: base * 5.0,
            space_6: base * 6.0,
            space_8: base * 8.0,
            space_10: base * 10.0,
            space_12: base * 12.0,
            space_16: base * 16.0,
        }
    }

    /// Get a spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space5 => self.space_5,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
            SpacingToken::Space10 => self.space_10,
            SpacingToken::Space12 => self.space_12,
            SpacingToken::Space16 => self.space_16,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        // 4px base
        Self::with_base(4.0)
    }
}
