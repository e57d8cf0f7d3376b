//! Fixed-endpoint cubic Bezier parametric form.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::point::Point;
use crate::preset::Preset;

/// A cubic Bezier easing curve with fixed endpoints.
///
/// Only the two shaping points `P2` and `P3` vary; `P1` is pinned to
/// `(0,0)` and `P4` to `(1,1)`, so the curve always starts at zero
/// progress and ends at full progress. Shaping points may leave `[0,1]`
/// to produce overshoot easing.
///
/// # Example
///
/// ```
/// use easing_curves::{CubicBezier, Point};
///
/// let curve = CubicBezier::new(Point::new(0.25, 0.1), Point::new(0.25, 1.0));
/// let mid = curve.point_at(0.5);
/// assert!(mid.x > 0.0 && mid.x < 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    /// First shaping point.
    pub p2: Point,
    /// Second shaping point.
    pub p3: Point,
}

impl CubicBezier {
    /// Fixed start endpoint `P1`.
    pub const START: Point = Point::new(0.0, 0.0);
    /// Fixed end endpoint `P4`.
    pub const END: Point = Point::new(1.0, 1.0);

    /// Create a curve from its two shaping points.
    pub const fn new(p2: Point, p3: Point) -> Self {
        Self { p2, p3 }
    }

    /// Create the curve for a named preset.
    pub const fn from_preset(preset: Preset) -> Self {
        let (p2, p3) = preset.control_points();
        Self { p2, p3 }
    }

    /// Evaluate the parametric curve at `t`.
    ///
    /// Uses the standard cubic form
    /// `B(t) = (1-t)³P₁ + 3(1-t)²tP₂ + 3(1-t)t²P₃ + t³P₄`
    /// for both coordinates. `t` is not clamped; sampling only ever feeds
    /// values in `(0, 1]`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * Self::START.x
            + 3.0 * mt2 * t * self.p2.x
            + 3.0 * mt * t2 * self.p3.x
            + t3 * Self::END.x;
        let y = mt3 * Self::START.y
            + 3.0 * mt2 * t * self.p2.y
            + 3.0 * mt * t2 * self.p3.y
            + t3 * Self::END.y;

        Point::new(x, y)
    }

    /// Check the shaping points for NaN/infinite coordinates.
    pub fn validate(&self) -> Result<(), CurveError> {
        for (name, point) in [("P2", self.p2), ("P3", self.p3)] {
            for (coordinate, value) in [("x", point.x), ("y", point.y)] {
                if !value.is_finite() {
                    return Err(CurveError::NonFiniteControlPoint {
                        point: name,
                        coordinate,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::from_preset(Preset::Ease)
    }
}

/// How the active `(P2, P3)` pair was chosen.
///
/// Resolved exactly once at evaluator construction: explicit points win
/// only when both are supplied, otherwise the preset's literal pair is
/// used.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CurveSource {
    /// Caller-supplied shaping points.
    Explicit {
        /// First shaping point.
        p2: Point,
        /// Second shaping point.
        p3: Point,
    },
    /// A named preset.
    Preset(Preset),
}

impl CurveSource {
    /// Resolve into the concrete curve.
    pub const fn resolve(self) -> CubicBezier {
        match self {
            CurveSource::Explicit { p2, p3 } => CubicBezier::new(p2, p3),
            CurveSource::Preset(preset) => CubicBezier::from_preset(preset),
        }
    }
}

impl Default for CurveSource {
    fn default() -> Self {
        CurveSource::Preset(Preset::Ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bezier_endpoints() {
        let curve = CubicBezier::from_preset(Preset::Ease);

        let start = curve.point_at(0.0);
        assert_abs_diff_eq!(start.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-6);

        let end = curve.point_at(1.0);
        assert_abs_diff_eq!(end.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(end.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bezier_linear_preset_lies_on_diagonal() {
        let curve = CubicBezier::from_preset(Preset::Linear);

        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let p = curve.point_at(t);
            assert_abs_diff_eq!(p.x, p.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_bezier_overshoot_points_are_legal() {
        let curve = CubicBezier::new(Point::new(0.68, -0.55), Point::new(0.265, 1.55));
        assert!(curve.validate().is_ok());

        // Overshoot curves exceed 1.0 in y before settling back.
        let mut max_y = f32::NEG_INFINITY;
        for i in 1..=200 {
            let t = i as f32 / 200.0;
            max_y = max_y.max(curve.point_at(t).y);
        }
        assert!(max_y > 1.0);
    }

    #[test]
    fn test_bezier_validate_rejects_nan() {
        let curve = CubicBezier::new(Point::new(f32::NAN, 0.1), Point::new(0.25, 1.0));
        match curve.validate() {
            Err(CurveError::NonFiniteControlPoint {
                point, coordinate, ..
            }) => {
                assert_eq!(point, "P2");
                assert_eq!(coordinate, "x");
            }
            other => panic!("expected NonFiniteControlPoint, got {:?}", other),
        }
    }

    #[test]
    fn test_bezier_validate_rejects_infinity() {
        let curve = CubicBezier::new(Point::new(0.25, 0.1), Point::new(0.25, f32::INFINITY));
        match curve.validate() {
            Err(CurveError::NonFiniteControlPoint {
                point, coordinate, ..
            }) => {
                assert_eq!(point, "P3");
                assert_eq!(coordinate, "y");
            }
            other => panic!("expected NonFiniteControlPoint, got {:?}", other),
        }
    }

    #[test]
    fn test_source_explicit_wins() {
        let p2 = Point::new(0.1, 0.9);
        let p3 = Point::new(0.9, 0.1);
        let source = CurveSource::Explicit { p2, p3 };
        assert_eq!(source.resolve(), CubicBezier::new(p2, p3));
    }

    #[test]
    fn test_source_preset_resolves_to_literal_pair() {
        let source = CurveSource::Preset(Preset::EaseIn);
        let curve = source.resolve();
        let (p2, p3) = Preset::EaseIn.control_points();
        assert_eq!(curve, CubicBezier::new(p2, p3));
    }

    #[test]
    fn test_bezier_default_is_ease() {
        assert_eq!(CubicBezier::default(), CubicBezier::from_preset(Preset::Ease));
    }

    #[test]
    fn test_bezier_serialization() {
        let curve = CubicBezier::new(Point::new(0.25, 0.1), Point::new(0.25, 1.0));
        let json = match serde_json::to_string(&curve) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {:?}", e),
        };
        let back: CubicBezier = match serde_json::from_str(&json) {
            Ok(c) => c,
            Err(e) => panic!("deserialization failed: {:?}", e),
        };
        assert_eq!(curve, back);
    }
}
