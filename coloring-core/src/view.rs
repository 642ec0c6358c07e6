//! Uniform zoom about the origin.

use serde::{Deserialize, Serialize};

/// Smallest accepted zoom factor.
pub const MIN_ZOOM: f32 = 0.5;
/// Largest accepted zoom factor.
pub const MAX_ZOOM: f32 = 2.0;

/// Absolute scale applied to the whole scene, anchored at `(0, 0)`.
///
/// Deserialization rejects factors outside `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredView")]
pub struct ViewTransform {
    scale_factor: f32,
}

#[derive(Deserialize)]
struct StoredView {
    scale_factor: f32,
}

impl TryFrom<StoredView> for ViewTransform {
    type Error = String;

    fn try_from(stored: StoredView) -> Result<Self, Self::Error> {
        if Self::accepts(stored.scale_factor) {
            Ok(Self {
                scale_factor: stored.scale_factor,
            })
        } else {
            Err(format!(
                "scale factor {} outside [{MIN_ZOOM}, {MAX_ZOOM}]",
                stored.scale_factor
            ))
        }
    }
}

impl ViewTransform {
    /// Identity transform (100%).
    #[must_use]
    pub const fn new() -> Self {
        Self { scale_factor: 1.0 }
    }

    /// Current absolute scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Whether `factor` is an accepted zoom target.
    #[must_use]
    pub fn accepts(factor: f32) -> bool {
        factor.is_finite() && (MIN_ZOOM..=MAX_ZOOM).contains(&factor)
    }

    /// Move to an absolute `target` factor.
    ///
    /// Returns the ratio existing geometry must be scaled by, or `None`
    /// when the target is out of range and nothing changed.
    pub fn retarget(&mut self, target: f32) -> Option<f32> {
        if !Self::accepts(target) {
            tracing::debug!("Zoom {target} rejected, keeping {}", self.scale_factor);
            return None;
        }
        let ratio = target / self.scale_factor;
        self.scale_factor = target;
        Some(ratio)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_relative_to_current() {
        let mut view = ViewTransform::new();
        assert_eq!(view.retarget(1.5), Some(1.5));
        assert_eq!(view.retarget(0.75), Some(0.5));
        assert!((view.scale_factor() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut view = ViewTransform::new();
        assert_eq!(view.retarget(0.4), None);
        assert_eq!(view.retarget(2.5), None);
        assert_eq!(view.retarget(f32::NAN), None);
        assert!((view.scale_factor() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_factor() {
        for json in [
            r#"{"scale_factor":0.0}"#,
            r#"{"scale_factor":5.0}"#,
            r#"{"scale_factor":-1.0}"#,
        ] {
            assert!(serde_json::from_str::<ViewTransform>(json).is_err(), "{json}");
        }
        let view: ViewTransform = serde_json::from_str(r#"{"scale_factor":1.5}"#).unwrap();
        assert!((view.scale_factor() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut view = ViewTransform::new();
        assert!(view.retarget(MIN_ZOOM).is_some());
        assert!(view.retarget(MAX_ZOOM).is_some());
    }
}
