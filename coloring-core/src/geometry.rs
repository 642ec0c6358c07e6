//! Points in scene coordinates.

use serde::{Deserialize, Serialize};

/// A point in scene coordinates (pixels, origin at top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale the point about the origin `(0, 0)`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_about_origin() {
        let p = Point::new(10.0, -4.0).scaled(1.5);
        assert_eq!(p, Point::new(15.0, -6.0));
    }
}
