//! Rotation planes in N-dimensional space
//!
//! In N dimensions rotations happen in planes rather than around axes. A plane
//! is named by the two coordinate axes that span it, so there are C(N, 2) of
//! them. Unlike a fixed 4D enum of planes, an [`AxisPair`] is only meaningful
//! relative to a dimensionality and has to be validated against it.

use serde::{Deserialize, Serialize};

use crate::MathError;

/// The 2-plane spanned by two coordinate axes
///
/// Serializes as a two-element array, e.g. `[0, 2]` for the XZ plane.
/// Construction does not validate; use [`AxisPair::validate`] before rotating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct AxisPair {
    a: usize,
    b: usize,
}

impl AxisPair {
    /// Create a plane from two axis indices
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// The two axes, in the order they were given
    #[inline]
    pub fn axes(self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Whether both axes exist in `dimensions`-space and are distinct
    #[inline]
    pub fn fits(self, dimensions: usize) -> bool {
        self.a != self.b && self.a < dimensions && self.b < dimensions
    }

    /// Check the plane against a dimensionality
    pub fn validate(self, dimensions: usize) -> Result<Self, MathError> {
        if self.fits(dimensions) {
            Ok(self)
        } else {
            Err(MathError::InvalidAxisPair { a: self.a, b: self.b, dimensions })
        }
    }
}

impl From<[usize; 2]> for AxisPair {
    fn from([a, b]: [usize; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<AxisPair> for [usize; 2] {
    fn from(plane: AxisPair) -> Self {
        [plane.a, plane.b]
    }
}

/// A rotation by a fixed angle in one plane, with sine and cosine precomputed
///
/// Applying it to many vertices avoids re-evaluating the trigonometry per
/// vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRotation {
    a: usize,
    b: usize,
    cos: f32,
    sin: f32,
}

impl PlaneRotation {
    /// Create a rotation of `angle` radians in `plane`
    pub fn new(angle: f32, plane: AxisPair) -> Self {
        let (a, b) = plane.axes();
        Self { a, b, cos: angle.cos(), sin: angle.sin() }
    }

    /// Rotate `v` in place
    ///
    /// Both plane components are computed from the original values.
    /// The plane must already have been validated against `v.len()`.
    #[inline]
    pub fn apply(&self, v: &mut [f32]) {
        debug_assert!(self.a < v.len() && self.b < v.len());
        let (va, vb) = (v[self.a], v[self.b]);
        v[self.a] = va * self.cos - vb * self.sin;
        v[self.b] = vb * self.cos + va * self.sin;
    }
}
