//! Cubic Bezier easing evaluation for animation timelines.
//!
//! This crate maps linear progress `x` in `[0,1]` to eased progress `y`
//! through a fixed-endpoint cubic Bezier curve, the way CSS
//! `transition-timing-function` does. The curve is forward-sampled once at
//! construction into a dense point table; queries answer `y = f(x)` by
//! scanning that table and linearly interpolating between the bracketing
//! samples.
//!
//! # Overview
//!
//! - [`Preset`]: the named CSS curves (`ease`, `easeIn`, `easeOut`,
//!   `easeInOut`, `linear`) with their literal control-point pairs
//! - [`CubicBezier`]: the parametric form with `P1=(0,0)` and `P4=(1,1)`
//!   fixed; only `P2`/`P3` shape the curve
//! - [`CurveEvaluator`]: the sample table plus a monotonic search cursor
//!
//! # The cursor contract
//!
//! Lookups are optimized for the common caller: an animation feeding
//! monotonically increasing progress, one query per frame. The evaluator
//! keeps a cursor at the position after the last answered query and scans
//! forward from there, so a forward sweep costs amortized near-constant
//! time instead of a search per call. Queries behind the cursor hit a
//! documented degraded-accuracy fallback (reset, return `1.0`);
//! [`CurveEvaluator::reset_cursor`] is the escape hatch between
//! independent passes. See [`CurveEvaluator`] for the full contract.
//!
//! # Example
//!
//! ```
//! use easing_curves::{CurveEvaluator, CurveOptions, Point};
//!
//! // A custom curve: explicit shaping points override the preset.
//! let mut easing = CurveEvaluator::new(CurveOptions {
//!     p2: Some(Point::new(0.25, 0.1)),
//!     p3: Some(Point::new(0.25, 1.0)),
//!     ..CurveOptions::default()
//! })?;
//!
//! // One query per frame, progress increasing.
//! let eased = easing.evaluate(0.5);
//! assert!(eased > 0.5 && eased < 1.0);
//!
//! // Starting a new pass: reset the cursor first.
//! easing.reset_cursor();
//! assert_eq!(easing.evaluate(0.0), 0.0);
//! # Ok::<(), easing_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bezier;
pub mod error;
pub mod evaluator;
pub mod point;
pub mod prelude;
pub mod preset;

pub use bezier::{CubicBezier, CurveSource};
pub use error::CurveError;
pub use evaluator::{CurveEvaluator, CurveOptions};
pub use point::Point;
pub use preset::Preset;
