//! Error types for evaluator construction.

/// Validation errors raised when building a [`crate::CurveEvaluator`].
///
/// Evaluation itself never errors: every query input maps to a defined
/// output through the boundary and fallback rules. Only construction
/// validates, and only defensively: shaping points outside `[0,1]`
/// (overshoot curves) are legal, so the checks are limited to what curve
/// generation actually needs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// The sample table must hold at least one entry.
    #[error("precision must be at least 1, got {value}")]
    InvalidPrecision {
        /// The rejected precision.
        value: usize,
    },

    /// An explicit control-point coordinate is NaN or infinite.
    #[error("control point {point} {coordinate} coordinate is not finite ({value})")]
    NonFiniteControlPoint {
        /// Which shaping point ("P2" or "P3").
        point: &'static str,
        /// Which coordinate ("x" or "y").
        coordinate: &'static str,
        /// The rejected value.
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_precision() {
        let err = CurveError::InvalidPrecision { value: 0 };
        let msg = format!("{}", err);
        assert!(msg.contains("at least 1"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_error_display_non_finite() {
        let err = CurveError::NonFiniteControlPoint {
            point: "P2",
            coordinate: "x",
            value: f32::NAN,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("P2"));
        assert!(msg.contains("x coordinate"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = CurveError::InvalidPrecision { value: 0 };
        let _: &dyn std::error::Error = &err;
    }
}
