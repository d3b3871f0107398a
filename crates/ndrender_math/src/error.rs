//! Math error types
//!
//! Errors raised by the vector operations and the projection pipeline.
//! All of them indicate either a caller programming error or a degenerate
//! geometric configuration; none are retried.

use std::fmt;

/// Error type for N-dimensional vector math
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Two operands (or a matrix and a vector) have incompatible lengths
    DimensionMismatch {
        /// Length of the left-hand operand
        left: usize,
        /// Length of the right-hand operand
        right: usize,
    },
    /// Attempted to normalize a zero-length vector
    DegenerateVector,
    /// Perspective division by a (near) zero denominator
    ProjectionSingularity {
        /// Axis being collapsed when the singularity occurred
        axis: usize,
        /// The offending denominator `k + component[axis]`
        denominator: f32,
    },
    /// A rotation plane with an out-of-range or repeated axis
    InvalidAxisPair {
        /// First axis of the plane
        a: usize,
        /// Second axis of the plane
        b: usize,
        /// Dimensionality the plane was checked against
        dimensions: usize,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { left, right } => {
                write!(f, "Dimension mismatch: {} vs {} components", left, right)
            }
            MathError::DegenerateVector => write!(f, "Cannot normalize a zero-length vector"),
            MathError::ProjectionSingularity { axis, denominator } => write!(
                f,
                "Projection singularity collapsing axis {} (denominator {})",
                axis, denominator
            ),
            MathError::InvalidAxisPair { a, b, dimensions } => write!(
                f,
                "Invalid rotation plane ({}, {}) for {} dimensions",
                a, b, dimensions
            ),
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MathError::DimensionMismatch { left: 4, right: 3 };
        let msg = format!("{}", err);
        assert!(msg.contains("mismatch"));
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_singularity_display() {
        let err = MathError::ProjectionSingularity { axis: 3, denominator: 0.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("axis 3"));
    }

    #[test]
    fn test_axis_pair_display() {
        let err = MathError::InvalidAxisPair { a: 1, b: 1, dimensions: 4 };
        let msg = format!("{}", err);
        assert!(msg.contains("(1, 1)"));
        assert!(msg.contains("4 dimensions"));
    }
}
