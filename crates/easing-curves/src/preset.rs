//! Named easing presets and their control-point pairs.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// The named easing curves, matching the CSS `transition-timing-function`
/// keywords and their literal control-point pairs.
///
/// Each preset expands to a `(P2, P3)` pair for the fixed-endpoint cubic
/// Bezier `P1=(0,0) .. P4=(1,1)`.
///
/// # Example
///
/// ```
/// use easing_curves::Preset;
///
/// let (p2, p3) = Preset::Ease.control_points();
/// assert!((p2.x - 0.25).abs() < 1e-6);
/// assert!((p3.y - 1.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    /// Gentle acceleration then deceleration: `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    #[default]
    Ease,
    /// Slow start: `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Slow finish: `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Slow start and finish: `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Identity mapping: `cubic-bezier(0, 0, 1, 1)`.
    Linear,
}

impl Preset {
    /// The `(P2, P3)` shaping pair for this preset.
    pub const fn control_points(self) -> (Point, Point) {
        match self {
            Preset::Ease => (Point::new(0.25, 0.1), Point::new(0.25, 1.0)),
            Preset::EaseIn => (Point::new(0.42, 0.0), Point::new(1.0, 1.0)),
            Preset::EaseOut => (Point::new(0.0, 0.0), Point::new(0.58, 1.0)),
            Preset::EaseInOut => (Point::new(0.42, 0.0), Point::new(0.58, 1.0)),
            Preset::Linear => (Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        }
    }
}
