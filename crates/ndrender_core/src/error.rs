//! Shape error types
//!
//! Construction errors are unrecoverable for the shape in question. Rotation
//! and frame errors are local to one shape and one frame: the caller skips
//! rendering the shape for that frame or aborts, and never sees partially
//! written buffers.

use std::fmt;

use ndrender_math::MathError;

/// Error type for shape construction and per-frame updates
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Too few dimensions for the requested shape
    InvalidDimensions {
        /// Shape family name
        shape: &'static str,
        /// Requested dimensionality
        dimensions: usize,
        /// Smallest supported dimensionality
        minimum: usize,
    },
    /// Sweep resolution below 3 samples per circle
    InvalidSmoothness(usize),
    /// Complex graph grid with fewer than 2 samples per side
    InvalidGridDensity(usize),
    /// Projection constant not finite or not greater than 1
    InvalidProjectionConstant(f32),
    /// Vertex count does not fit the 32-bit index buffer
    TooManyVertices {
        /// Shape family name
        shape: &'static str,
    },
    /// Negative or non-finite frame time
    InvalidElapsedTime(f32),
    /// NaN or infinite rotation angle
    InvalidAngle(f32),
    /// Vector math failure (bad rotation plane, projection singularity, ...)
    Math(MathError),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidDimensions { shape, dimensions, minimum } => write!(
                f,
                "Invalid dimensions for {}: {} (minimum {})",
                shape, dimensions, minimum
            ),
            ShapeError::InvalidSmoothness(s) => {
                write!(f, "Invalid smoothness: {} (need at least 3 samples per circle)", s)
            }
            ShapeError::InvalidGridDensity(n) => {
                write!(f, "Invalid grid density: {} (need at least 2 samples per side)", n)
            }
            ShapeError::InvalidProjectionConstant(k) => {
                write!(f, "Invalid projection constant: {} (must be finite and greater than 1)", k)
            }
            ShapeError::TooManyVertices { shape } => {
                write!(f, "Too many vertices for {} to index with u32", shape)
            }
            ShapeError::InvalidElapsedTime(dt) => write!(f, "Invalid elapsed time: {}", dt),
            ShapeError::InvalidAngle(angle) => write!(f, "Invalid rotation angle: {}", angle),
            ShapeError::Math(e) => write!(f, "Math error: {}", e),
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::Math(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MathError> for ShapeError {
    fn from(e: MathError) -> Self {
        ShapeError::Math(e)
    }
}
