//! Brush color and width.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::BrushConfig;
use crate::{CanvasError, CanvasResult};

/// An opaque RGB color.
///
/// Serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Black, the default brush color.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White, the canvas background.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// X11 grey, used for texture overlays.
    pub const GREY: Self = Self::rgb(190, 190, 190);

    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(160, 32, 240),
            "pink" => Self::rgb(255, 192, 203),
            "brown" => Self::rgb(165, 42, 42),
            "grey" | "gray" => Self::GREY,
            "cyan" => Self::rgb(0, 255, 255),
            "magenta" => Self::rgb(255, 0, 255),
            _ => return None,
        };
        Some(color)
    }

    fn from_hex_digits(digits: &str) -> Option<Self> {
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                // #rgb expands each digit to a doubled pair: f -> ff
                let mut it = digits.chars().map(|c| {
                    c.to_digit(16).and_then(|d| u8::try_from(d * 17).ok())
                });
                Some(Self::rgb(it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = CanvasError;

    fn from_str(s: &str) -> CanvasResult<Self> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(digits) => Self::from_hex_digits(digits),
            None => Self::named(&trimmed.to_ascii_lowercase()),
        };
        parsed.ok_or_else(|| CanvasError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = CanvasError;

    fn try_from(value: String) -> CanvasResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// The brush applied to every new segment.
///
/// Changing the brush never affects segments that were already drawn;
/// each segment copies the style at the moment it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushState {
    color: Color,
    width: u32,
    min_width: u32,
    max_width: u32,
}

impl BrushState {
    /// Create a brush from its configuration.
    #[must_use]
    pub fn new(config: &BrushConfig) -> Self {
        let (min_width, max_width) = config.bounds();
        Self {
            color: config.default_color,
            width: config.default_width.clamp(min_width, max_width),
            min_width,
            max_width,
        }
    }

    /// Current color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the brush color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set the brush width, pinned to the configured bounds.
    ///
    /// Returns the width actually stored.
    pub fn set_width(&mut self, width: i64) -> u32 {
        let clamped = width.clamp(i64::from(self.min_width), i64::from(self.max_width));
        self.width = u32::try_from(clamped).unwrap_or(self.min_width);
        if i64::from(self.width) != width {
            tracing::debug!("Brush width {width} pinned to {}", self.width);
        }
        self.width
    }
}

impl Default for BrushState {
    fn default() -> Self {
        Self::new(&BrushConfig::default())
    }
}
