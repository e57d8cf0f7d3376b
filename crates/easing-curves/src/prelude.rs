//! Prelude module for convenient easing imports.
//!
//! # Example
//!
//! ```
//! use easing_curves::prelude::*;
//!
//! let mut easing = CurveEvaluator::from_preset(Preset::EaseOut);
//! assert_eq!(easing.evaluate(1.0), 1.0);
//! ```

pub use crate::{
    bezier::{CubicBezier, CurveSource},
    error::CurveError,
    evaluator::{CurveEvaluator, CurveOptions},
    point::Point,
    preset::Preset,
};
