//! Sample-table easing evaluation with a monotonic search cursor.

use serde::{Deserialize, Serialize};

use crate::bezier::{CubicBezier, CurveSource};
use crate::error::CurveError;
use crate::point::Point;
use crate::preset::Preset;

const fn default_precision() -> usize {
    CurveEvaluator::DEFAULT_PRECISION
}

/// Construction options for a [`CurveEvaluator`].
///
/// Mirrors the CSS-style configuration surface: either a named preset or
/// an explicit `(P2, P3)` pair. Explicit points take precedence over the
/// preset only when **both** are supplied.
///
/// # Example
///
/// ```
/// use easing_curves::{CurveEvaluator, CurveOptions, Preset};
///
/// let mut easing = CurveEvaluator::new(CurveOptions {
///     preset: Preset::EaseInOut,
///     ..CurveOptions::default()
/// })?;
/// assert!(easing.evaluate(0.5) > 0.0);
/// # Ok::<(), easing_curves::CurveError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    /// Explicit first shaping point.
    pub p2: Option<Point>,
    /// Explicit second shaping point.
    pub p3: Option<Point>,
    /// Number of sample-table entries. Must be at least 1.
    pub precision: usize,
    /// Preset used when the explicit pair is incomplete.
    pub preset: Preset,
}

impl CurveOptions {
    /// The curve source these options select.
    pub fn source(&self) -> CurveSource {
        match (self.p2, self.p3) {
            (Some(p2), Some(p3)) => CurveSource::Explicit { p2, p3 },
            _ => CurveSource::Preset(self.preset),
        }
    }
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            p2: None,
            p3: None,
            precision: default_precision(),
            preset: Preset::Ease,
        }
    }
}

/// Forward-sampled easing curve evaluator.
///
/// Construction evaluates the cubic Bezier at `precision` evenly spaced
/// parameter values in `(0, 1]` and stores the resulting points in order
/// of increasing `t`. Queries scan that table forward from an internal
/// cursor and linearly interpolate between the two samples bracketing the
/// queried `x`.
///
/// # Query-order contract
///
/// The cursor is a deliberate micro-optimization for the common caller: an
/// animation feeding monotonically non-decreasing progress values, one per
/// frame. Each query resumes scanning where the previous one stopped,
/// giving amortized near-constant-time lookups. The trade-off is that a
/// query *behind* the cursor finds no bracket; [`CurveEvaluator::evaluate`]
/// then resets the cursor and returns `1.0` rather than scanning backward
/// or erroring. Callers interleaving independent passes must call
/// [`CurveEvaluator::reset_cursor`] between them, or accept that fallback.
/// Do not "fix" this with a binary search; the fallback is part of the
/// observable contract.
///
/// `evaluate` takes `&mut self`, so one evaluator serves one logical
/// timeline at a time. For concurrent timelines over the same curve,
/// clone the evaluator; each clone owns its cursor.
///
/// # Example
///
/// ```
/// use easing_curves::CurveEvaluator;
///
/// let mut easing = CurveEvaluator::default(); // "ease", precision 300
/// let mut previous = 0.0;
/// for frame in 0..=60 {
///     let progress = frame as f32 / 60.0;
///     let eased = easing.evaluate(progress);
///     assert!(eased >= previous);
///     previous = eased;
/// }
/// assert!((previous - 1.0).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CurveEvaluator {
    curve: CubicBezier,
    samples: Vec<Point>,
    cursor: usize,
}

impl CurveEvaluator {
    /// Default sample-table size.
    pub const DEFAULT_PRECISION: usize = 300;

    /// Build an evaluator from construction options.
    ///
    /// Resolves the active `(P2, P3)` pair (explicit pair when both points
    /// are present, preset otherwise), validates it defensively, and
    /// samples the curve. Construction is deterministic: identical options
    /// produce identical sample tables.
    ///
    /// # Errors
    ///
    /// * [`CurveError::InvalidPrecision`] when `precision == 0`
    /// * [`CurveError::NonFiniteControlPoint`] when a shaping coordinate
    ///   is NaN or infinite
    pub fn new(options: CurveOptions) -> Result<Self, CurveError> {
        if options.precision == 0 {
            return Err(CurveError::InvalidPrecision {
                value: options.precision,
            });
        }
        let curve = options.source().resolve();
        curve.validate()?;
        Ok(Self::sample(curve, options.precision))
    }

    /// Build an evaluator for a named preset at the default precision.
    ///
    /// Infallible: preset control points are literal finite pairs.
    pub fn from_preset(preset: Preset) -> Self {
        Self::sample(CubicBezier::from_preset(preset), Self::DEFAULT_PRECISION)
    }

    fn sample(curve: CubicBezier, precision: usize) -> Self {
        let samples = (0..precision)
            .map(|i| curve.point_at((i + 1) as f32 / precision as f32))
            .collect();
        Self {
            curve,
            samples,
            cursor: 0,
        }
    }

    /// Map horizontal progress `x` to eased progress `y`.
    ///
    /// Boundary policy: `x <= 0` returns `0.0` without touching the
    /// cursor; `x >= 1` resets the cursor and returns `1.0`. In between,
    /// the table is scanned forward from the cursor and the result is
    /// linearly interpolated between the bracketing samples. When no
    /// bracket exists (the cursor already sits past the queried region,
    /// the query falls below the first sampled `x`, or the query is NaN),
    /// the cursor resets and the result is `1.0`; see the type-level
    /// query-order contract.
    ///
    /// Never errors and never panics; every input maps to a defined output.
    // Exact float equality is intentional: a query matching a sampled x
    // bit-for-bit returns the stored y without interpolation.
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&mut self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            self.cursor = 0;
            return 1.0;
        }

        let mut bracket = None;
        for (i, sample) in self.samples.iter().enumerate().skip(self.cursor) {
            if sample.x == x {
                self.cursor = i + 1;
                return sample.y;
            }
            if sample.x > x {
                self.cursor = i + 1;
                // A valid bracket needs the preceding sample at or below the
                // query; if the cursor already sat past the queried region
                // there is none, and the fallback below applies.
                bracket = i
                    .checked_sub(1)
                    .and_then(|below| self.samples.get(below))
                    .filter(|below| below.x <= x)
                    .map(|below| (*below, *sample));
                break;
            }
        }

        match bracket {
            Some((below, above)) => {
                (x - below.x) / (above.x - below.x) * (above.y - below.y) + below.y
            }
            None => {
                self.cursor = 0;
                1.0
            }
        }
    }

    /// Reset the search cursor to the start of the table.
    ///
    /// Call between independent query passes to restore full-table
    /// accuracy for the next pass.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// The precomputed sample table, ordered by increasing `t`.
    ///
    /// Read-only; useful for diagnostics and visualization.
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Current cursor position (the index the next scan starts from).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries in the sample table.
    pub fn precision(&self) -> usize {
        self.samples.len()
    }

    /// The resolved curve this evaluator samples.
    pub fn bezier(&self) -> &CubicBezier {
        &self.curve
    }
}

impl Default for CurveEvaluator {
    fn default() -> Self {
        Self::from_preset(Preset::Ease)
    }
}
