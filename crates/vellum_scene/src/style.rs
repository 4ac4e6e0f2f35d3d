//! Fill, stroke, shadow and font attributes for shapes.

use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// RGBA color.
///
/// Serialized as a `#RRGGBBAA` string; parsed from `#RRGGBB`, `#RRGGBBAA`
/// or one of the CSS names in [`Color::named`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// CSS `whitesmoke` (#F5F5F5).
    pub const WHITESMOKE: Self = Self::hex(0xF5F5_F5FF);
    /// CSS `lightgray` (#D3D3D3).
    pub const LIGHTGRAY: Self = Self::hex(0xD3D3_D3FF);
    /// CSS `gray` (#808080).
    pub const GRAY: Self = Self::hex(0x8080_80FF);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Looks up a CSS color name (case-insensitive).
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "whitesmoke" => Self::WHITESMOKE,
            "lightgray" | "lightgrey" => Self::LIGHTGRAY,
            "gray" | "grey" => Self::GRAY,
            "red" => Self::hex(0xFF00_00FF),
            "green" => Self::hex(0x0080_00FF),
            "blue" => Self::hex(0x0000_FFFF),
            "yellow" => Self::hex(0xFFFF_00FF),
            _ => return None,
        };
        Some(color)
    }

    /// Parses `#RRGGBB`, `#RRGGBBAA` or a CSS name.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidColor`] for anything else.
    pub fn parse(input: &str) -> SceneResult<Self> {
        let trimmed = input.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Self::named(trimmed).ok_or_else(|| SceneError::InvalidColor(input.to_string()));
        };

        let invalid = || SceneError::InvalidColor(input.to_string());
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::hex((value << 8) | 0xFF)),
            8 => Ok(Self::hex(value)),
            _ => Err(invalid()),
        }
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel_byte(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = SceneError;

    fn try_from(value: String) -> SceneResult<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            Color::channel_byte(color.r),
            Color::channel_byte(color.g),
            Color::channel_byte(color.b),
            Color::channel_byte(color.a),
        )
    }
}

/// Drop shadow cast by a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Blur radius.
    pub blur: f32,
    /// Horizontal offset.
    pub offset_x: f32,
    /// Vertical offset.
    pub offset_y: f32,
}

impl Shadow {
    /// Creates a new shadow.
    #[must_use]
    pub const fn new(color: Color, blur: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            color,
            blur,
            offset_x,
            offset_y,
        }
    }
}

/// Font weight/slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
}

/// Horizontal text anchoring relative to the text's x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// x is the left edge.
    #[default]
    Left,
    /// x is the center.
    Center,
    /// x is the right edge.
    Right,
}

/// Vertical text anchoring relative to the text's y position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    /// y is the top of the em box.
    Top,
    /// y is the middle of the em box.
    Middle,
    /// y is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// y is the bottom of the em box.
    Bottom,
}

/// Font used by a text shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name.
    pub family: String,
    /// Weight/slant.
    pub style: FontStyle,
    /// Size in scene units.
    pub size: f32,
}

impl Font {
    /// Creates a new font.
    #[must_use]
    pub fn new(family: impl Into<String>, style: FontStyle, size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Verdana", FontStyle::Normal, 10.0)
    }
}
