//! Plain (x, y) point used for curve samples and control points.

use serde::{Deserialize, Serialize};

/// A point on (or shaping) the easing curve.
///
/// Curve samples keep both coordinates in `[0,1]`; the shaping control
/// points `P2`/`P3` may leave that range for overshoot easing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal progress coordinate.
    pub x: f32,
    /// Eased progress coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
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
    fn test_point_from_tuple() {
        let p = Point::from((0.25, 0.1));
        assert!((p.x - 0.25).abs() < 1e-6);
        assert!((p.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(0.0, 1.0).is_finite());
        assert!(Point::new(-0.5, 1.5).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
        assert!(!Point::new(f32::NEG_INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_point_serialization() {
        let p = Point::new(0.42, 0.0);
        let json = match serde_json::to_string(&p) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {:?}", e),
        };
        let back: Point = match serde_json::from_str(&json) {
            Ok(p) => p,
            Err(e) => panic!("deserialization failed: {:?}", e),
        };
        assert_eq!(p, back);
    }
}
