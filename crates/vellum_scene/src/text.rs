//! Text measurement.
//!
//! The scene never rasterizes glyphs. Widgets that size themselves from
//! their text ask a [`TextMeasure`] implementation for the extent instead.

use crate::geometry::BoundingBox;
use crate::style::{Font, FontStyle};

/// Measures the extent a string occupies when drawn with a font.
pub trait TextMeasure {
    /// Returns the bounding box of `text` drawn with `font`.
    ///
    /// Empty text must measure 0 × 0.
    fn measure(&self, text: &str, font: &Font) -> BoundingBox;
}

/// Fixed-advance estimator.
///
/// Every character advances `size * advance`; bold text is widened by
/// `bold_factor`. Each line is `size * line_height` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance per character as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
    /// Extra width multiplier applied to bold text.
    pub bold_factor: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
            bold_factor: 1.1,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, font: &Font) -> BoundingBox {
        if text.is_empty() {
            return BoundingBox::EMPTY;
        }

        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);

        let mut width = widest as f32 * font.size * self.advance;
        if font.style == FontStyle::Bold {
            width *= self.bold_factor;
        }
        let height = lines as f32 * font.size * self.line_height;

        BoundingBox::from_size(width, height)
    }
}

/// Measures every non-empty string as the same box.
///
/// Useful when layout must not depend on the text content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Width of any non-empty string.
    pub width: f32,
    /// Height of any non-empty string.
    pub height: f32,
}

impl FixedMetrics {
    /// Creates a new fixed measurer.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl TextMeasure for FixedMetrics {
    fn measure(&self, text: &str, _font: &Font) -> BoundingBox {
        if text.is_empty() {
            BoundingBox::EMPTY
        } else {
            BoundingBox::from_size(self.width, self.height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_measures_zero() {
        let font = Font::default();

        assert_eq!(MonospaceMetrics::default().measure("", &font), BoundingBox::EMPTY);
        assert_eq!(FixedMetrics::new(40.0, 12.0).measure("", &font), BoundingBox::EMPTY);
    }

    #[test]
    fn test_monospace_widest_line_wins() {
        let metrics = MonospaceMetrics {
            advance: 0.5,
            line_height: 1.0,
            bold_factor: 1.0,
        };
        let font = Font::new("Verdana", FontStyle::Normal, 10.0);

        let bb = metrics.measure("abcd\nab", &font);
        assert_eq!(bb.width(), 20.0);
        assert_eq!(bb.height(), 20.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let metrics = MonospaceMetrics::default();
        let normal = metrics.measure("value", &Font::new("Verdana", FontStyle::Normal, 10.0));
        let bold = metrics.measure("value", &Font::new("Verdana", FontStyle::Bold, 10.0));

        assert!(bold.width() > normal.width());
        assert_eq!(bold.height(), normal.height());
    }
}
