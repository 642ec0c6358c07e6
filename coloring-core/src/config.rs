//! Canvas and brush configuration.

use serde::{Deserialize, Serialize};

use crate::brush::Color;

/// Configuration for a coloring canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels (unzoomed).
    pub width: u32,
    /// Canvas height in pixels (unzoomed).
    pub height: u32,
    /// Spacing between texture overlay lines.
    pub texture_step: u32,
    /// Brush settings.
    pub brush: BrushConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            texture_step: 10,
            brush: BrushConfig::default(),
        }
    }
}

/// Brush width bounds and initial style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Smallest allowed width.
    pub min_width: u32,
    /// Largest allowed width.
    pub max_width: u32,
    /// Width at session start.
    pub default_width: u32,
    /// Color at session start.
    pub default_color: Color,
}

impl BrushConfig {
    /// Normalized `(min, max)` bounds, never below 1.
    #[must_use]
    pub fn bounds(&self) -> (u32, u32) {
        let min = self.min_width.max(1);
        (min, self.max_width.max(min))
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_width: 1,
            max_width: 20,
            default_width: 5,
            default_color: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CanvasConfig = serde_json::from_str(r#"{"width": 400}"#).unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 600);
        assert_eq!(config.texture_step, 10);
        assert_eq!(config.brush.max_width, 20);
    }

    #[test]
    fn test_bounds_are_normalized() {
        let brush = BrushConfig {
            min_width: 0,
            max_width: 0,
            ..BrushConfig::default()
        };
        assert_eq!(brush.bounds(), (1, 1));
    }
}
