//! Perspective projection from N dimensions down to 3
//!
//! The highest remaining axis is collapsed one at a time, exactly like a
//! pinhole camera divides by depth: every component below the collapsed axis
//! is scaled by `k / (k + depth)`, then the depth component is dropped. `k` is
//! the camera's distance to the hyperplane of projection.
//!
//! The caller must pick `k` larger than the shape's extent along every axis.
//! That keeps `k + depth` away from zero; if it does reach zero anyway, or a
//! depth is not finite, the projection fails with
//! [`MathError::ProjectionSingularity`] instead of producing NaN or infinity.

use crate::vecn::Vec3;
use crate::MathError;

/// Denominators smaller than this in magnitude are treated as singular
pub const SINGULARITY_EPSILON: f32 = 1e-6;

/// Upper bound on dimensionality handled without heap allocation
const STACK_DIMENSIONS: usize = 16;

/// Project one point to 3D
///
/// `point` must have at least 3 components; a 3-component point is returned
/// unchanged.
pub fn project_to_3d(point: &[f32], k: f32) -> Result<Vec3, MathError> {
    if point.len() < 3 {
        return Err(MathError::DimensionMismatch { left: point.len(), right: 3 });
    }
    if point.len() <= STACK_DIMENSIONS {
        let mut scratch = [0.0f32; STACK_DIMENSIONS];
        scratch[..point.len()].copy_from_slice(point);
        collapse(&mut scratch[..point.len()], k)
    } else {
        collapse(&mut point.to_vec(), k)
    }
}

fn collapse(v: &mut [f32], k: f32) -> Result<Vec3, MathError> {
    for axis in (3..v.len()).rev() {
        let denominator = k + v[axis];
        if !denominator.is_finite() || denominator.abs() < SINGULARITY_EPSILON {
            return Err(MathError::ProjectionSingularity { axis, denominator });
        }
        let factor = k / denominator;
        for component in &mut v[..axis] {
            *component *= factor;
        }
    }
    Ok([v[0], v[1], v[2]])
}

/// Project every point of a flat arena with stride `dimensions` into `out`
///
/// `out` is cleared first and holds `3 * vertex_count` floats on success. On
/// failure its contents are unspecified, so callers project into a staging
/// buffer and only publish it once this returns `Ok`.
pub fn project_all(
    native: &[f32],
    dimensions: usize,
    k: f32,
    out: &mut Vec<f32>,
) -> Result<(), MathError> {
    debug_assert!(dimensions > 0 && native.len() % dimensions == 0);
    out.clear();
    out.reserve(native.len() / dimensions * 3);
    for point in native.chunks_exact(dimensions) {
        out.extend_from_slice(&project_to_3d(point, k)?);
    }
    Ok(())
}
