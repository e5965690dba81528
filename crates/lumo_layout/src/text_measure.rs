//! Text measurement for layout
//!
//! Text nodes need intrinsic sizes before flexbox can place them. The
//! measurer here estimates from character counts; swap in a different
//! [`TextMeasurer`] to measure with real font metrics.

/// Options that influence measured text size
#[derive(Clone, Debug)]
pub struct TextLayoutOptions {
    /// Line height as a multiple of font size
    pub line_height: f32,
    /// Extra spacing between characters, px
    pub letter_spacing: f32,
    /// Extra spacing between words, px
    pub word_spacing: f32,
    /// Wrap when the measured width exceeds this, px
    pub max_width: Option<f32>,
}

impl Default for TextLayoutOptions {
    fn default() -> Self {
        Self {
            line_height: 1.2,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            max_width: None,
        }
    }
}

/// Measured text dimensions
#[derive(Clone, Copy, Debug, Default)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    pub ascender: f32,
    pub descender: f32,
    pub line_count: u32,
}

/// Measures text for layout purposes
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font_size: f32, options: &TextLayoutOptions) -> TextMetrics;
}

/// Character-count estimator
///
/// Assumes ~0.55em per character, which tracks common UI sans fonts
/// closely enough for layout. Deterministic across platforms, so headless
/// runs produce the same geometry everywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f32, options: &TextLayoutOptions) -> TextMetrics {
        let char_count = text.chars().count() as f32;
        let word_count = text.split_whitespace().count().max(1) as f32;

        let base_char_width = font_size * 0.55;
        let base_width = char_count * base_char_width;

        let letter_spacing_total = if char_count > 1.0 {
            (char_count - 1.0) * options.letter_spacing
        } else {
            0.0
        };

        let word_spacing_total = if word_count > 1.0 {
            (word_count - 1.0) * options.word_spacing
        } else {
            0.0
        };

        let total_width = base_width + letter_spacing_total + word_spacing_total;

        let (width, line_count) = if let Some(max_width) = options.max_width {
            if total_width > max_width && max_width > 0.0 {
                let lines = (total_width / max_width).ceil() as u32;
                (max_width, lines.max(1))
            } else {
                (total_width, 1)
            }
        } else {
            (total_width, 1)
        };

        let line_height_px = font_size * options.line_height;
        let height = line_height_px * line_count as f32;

        TextMetrics {
            width,
            height,
            ascender: font_size * 0.8,
            descender: font_size * -0.2,
            line_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_character_count() {
        let measurer = HeuristicTextMeasurer;
        let options = TextLayoutOptions::default();

        let short = measurer.measure("ab", 16.0, &options);
        let long = measurer.measure("abcd", 16.0, &options);

        assert!(long.width > short.width);
        assert_eq!(short.line_count, 1);
        assert!((short.width - 2.0 * 16.0 * 0.55).abs() < 1e-4);
    }

    #[test]
    fn constrained_width_wraps_onto_more_lines() {
        let measurer = HeuristicTextMeasurer;
        let options = TextLayoutOptions {
            max_width: Some(50.0),
            ..Default::default()
        };

        let metrics = measurer.measure("a considerably longer run of text", 16.0, &options);
        assert_eq!(metrics.width, 50.0);
        assert!(metrics.line_count > 1);
        assert!((metrics.height - 16.0 * 1.2 * metrics.line_count as f32).abs() < 1e-4);
    }

    #[test]
    fn empty_text_measures_zero_width() {
        let measurer = HeuristicTextMeasurer;
        let metrics = measurer.measure("", 16.0, &TextLayoutOptions::default());
        assert_eq!(metrics.width, 0.0);
        assert_eq!(metrics.line_count, 1);
    }
}
