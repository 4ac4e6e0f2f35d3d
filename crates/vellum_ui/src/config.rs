//! Tooltip styling.
//!
//! Defaults reproduce the stock bubble: whitesmoke body, black Verdana 10,
//! 25 units of horizontal padding, 25 + 2 of vertical padding.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vellum_scene::{Color, Font, FontStyle, Shadow};

use crate::error::{UiError, UiResult};
use crate::widget::TRIANGLE_SIZE;

/// Visual constants for a [`Tooltip`](crate::Tooltip).
///
/// Every field is optional in TOML; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    /// Body, tail and mask fill.
    pub fill: Color,
    /// Outline of body and tail; `None` draws no outline.
    pub stroke: Option<Color>,
    /// Outline width of body and tail.
    pub stroke_width: f32,
    /// Body corner radius.
    pub corner_radius: f32,
    /// Width added to the wider of the two text lines.
    pub padding_width: f32,
    /// Height added to the two text lines.
    pub padding_height: f32,
    /// Extra height between the lines, added on top of `padding_height`.
    pub line_gap: f32,
    /// Distance between the label's center line and the text line.
    pub text_gap: f32,
    /// Upward nudge of the label line.
    pub label_lift: f32,
    /// Half-base and height of the tail.
    pub tail_size: f32,
    /// How far the mask triangle overlaps the body/tail seam.
    pub mask_inset: f32,
    /// Color of both text lines.
    pub text_color: Color,
    /// Font family of both text lines.
    pub font_family: String,
    /// Font size of both text lines.
    pub font_size: f32,
    /// Style of the text line.
    pub text_font_style: FontStyle,
    /// Style of the label line.
    pub label_font_style: FontStyle,
    /// Shadow under body and tail.
    pub shadow: Option<Shadow>,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            fill: Color::WHITESMOKE,
            stroke: None,
            stroke_width: 1.0,
            corner_radius: 5.0,
            padding_width: 25.0,
            padding_height: 25.0,
            line_gap: 2.0,
            text_gap: 2.0,
            label_lift: 1.0,
            tail_size: TRIANGLE_SIZE,
            mask_inset: 3.0,
            text_color: Color::BLACK,
            font_family: "Verdana".to_string(),
            font_size: 10.0,
            text_font_style: FontStyle::Normal,
            label_font_style: FontStyle::Bold,
            shadow: Some(Shadow::new(Color::BLACK.with_alpha(0.8), 10.0, 3.0, 3.0)),
        }
    }
}

impl TooltipStyle {
    /// Parses and validates a style from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Toml`] for malformed input and
    /// [`UiError::InvalidStyle`] for out-of-range values.
    pub fn from_toml_str(input: &str) -> UiResult<Self> {
        let style: Self = toml::from_str(input)?;
        style.validate()?;
        Ok(style)
    }

    /// Reads, parses and validates a style file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        let style = Self::from_toml_str(&input)?;
        tracing::debug!(path = %path.display(), "loaded tooltip style");
        Ok(style)
    }

    /// Checks that sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidStyle`] naming the first bad field.
    pub fn validate(&self) -> UiResult<()> {
        let non_negative = [
            ("stroke_width", self.stroke_width),
            ("corner_radius", self.corner_radius),
            ("padding_width", self.padding_width),
            ("padding_height", self.padding_height),
            ("line_gap", self.line_gap),
            ("tail_size", self.tail_size),
            ("mask_inset", self.mask_inset),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(UiError::InvalidStyle(format!("{name} must be >= 0, got {value}")));
        }
        if !(self.font_size > 0.0) {
            return Err(UiError::InvalidStyle(format!(
                "font_size must be > 0, got {}",
                self.font_size
            )));
        }
        if self.font_family.trim().is_empty() {
            return Err(UiError::InvalidStyle("font_family must not be empty".to_string()));
        }
        Ok(())
    }

    /// Font of the text line.
    #[must_use]
    pub fn text_font(&self) -> Font {
        Font::new(self.font_family.clone(), self.text_font_style, self.font_size)
    }

    /// Font of the label line.
    #[must_use]
    pub fn label_font(&self) -> Font {
        Font::new(self.font_family.clone(), self.label_font_style, self.font_size)
    }
}
