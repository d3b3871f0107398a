//! Dimension-agnostic vector operations
//!
//! Vectors are plain `f32` slices of any length. Operations that combine two
//! vectors check that the lengths agree and return [`MathError::DimensionMismatch`]
//! otherwise. 3D-only operations take `[f32; 3]` so the length is enforced by
//! the type system.

use crate::{AxisPair, MathError, PlaneRotation};

/// A 3D point or direction
pub type Vec3 = [f32; 3];

/// Square matrix of arbitrary side, indexed `m[col][row]` (column-major)
pub type MatN = Vec<Vec<f32>>;

#[inline]
fn check_len(u: &[f32], v: &[f32]) -> Result<(), MathError> {
    if u.len() != v.len() {
        return Err(MathError::DimensionMismatch { left: u.len(), right: v.len() });
    }
    Ok(())
}

/// Dot product
pub fn dot(u: &[f32], v: &[f32]) -> Result<f32, MathError> {
    check_len(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a * b).sum())
}

/// Component-wise sum
pub fn add(u: &[f32], v: &[f32]) -> Result<Vec<f32>, MathError> {
    check_len(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a + b).collect())
}

/// Component-wise difference `u - v`
pub fn sub(u: &[f32], v: &[f32]) -> Result<Vec<f32>, MathError> {
    check_len(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a - b).collect())
}

/// Multiply every component by `k`
pub fn scale(k: f32, v: &[f32]) -> Vec<f32> {
    v.iter().map(|c| c * k).collect()
}

/// Euclidean norm (square root of the sum of squares)
#[inline]
pub fn length(v: &[f32]) -> f32 {
    v.iter().map(|c| c * c).sum::<f32>().sqrt()
}

/// Scale `v` to unit length
///
/// Fails with [`MathError::DegenerateVector`] for the zero vector.
pub fn normalize(v: &[f32]) -> Result<Vec<f32>, MathError> {
    let len = length(v);
    if len == 0.0 {
        return Err(MathError::DegenerateVector);
    }
    Ok(scale(1.0 / len, v))
}

/// Right-handed 3D cross product
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// 3D difference `u - v`
#[inline]
pub fn sub3(u: Vec3, v: Vec3) -> Vec3 {
    [u[0] - v[0], u[1] - v[1], u[2] - v[2]]
}

/// 3D midpoint of `u` and `v`
#[inline]
pub fn midpoint3(u: Vec3, v: Vec3) -> Vec3 {
    [(u[0] + v[0]) * 0.5, (u[1] + v[1]) * 0.5, (u[2] + v[2]) * 0.5]
}

/// Normalize a 3D vector without allocating
pub fn normalize3(v: Vec3) -> Result<Vec3, MathError> {
    let len = length(&v);
    if len == 0.0 {
        return Err(MathError::DegenerateVector);
    }
    let inv = 1.0 / len;
    Ok([v[0] * inv, v[1] * inv, v[2] * inv])
}

/// Rotate `v` by `angle` radians in the plane spanned by two axes
///
/// Every component except the two plane axes is copied unchanged.
pub fn rotate_in_plane(v: &[f32], angle: f32, plane: AxisPair) -> Result<Vec<f32>, MathError> {
    let mut result = v.to_vec();
    rotate_in_plane_mut(&mut result, angle, plane)?;
    Ok(result)
}

/// In-place variant of [`rotate_in_plane`]
pub fn rotate_in_plane_mut(v: &mut [f32], angle: f32, plane: AxisPair) -> Result<(), MathError> {
    let rotation = PlaneRotation::new(angle, plane.validate(v.len())?);
    rotation.apply(v);
    Ok(())
}

/// Matrix-vector product with `m` indexed `m[col][row]`
///
/// `result[row] = Σ_col m[col][row] * v[col]`. The matrix must be square with
/// side `v.len()`.
pub fn mult_matrix(m: &[Vec<f32>], v: &[f32]) -> Result<Vec<f32>, MathError> {
    if m.len() != v.len() {
        return Err(MathError::DimensionMismatch { left: m.len(), right: v.len() });
    }
    let mut result = vec![0.0; v.len()];
    for (column, &weight) in m.iter().zip(v) {
        check_len(column, v)?;
        for (out, entry) in result.iter_mut().zip(column) {
            *out += entry * weight;
        }
    }
    Ok(result)
}

/// View a flat `x, y, z, x, y, z, ...` buffer as 3D points
///
/// # Panics
/// If the buffer length is not a multiple of 3.
#[inline]
pub fn as_points3(buffer: &[f32]) -> &[Vec3] {
    bytemuck::cast_slice(buffer)
}

/// Mutable variant of [`as_points3`]
#[inline]
pub fn as_points3_mut(buffer: &mut [f32]) -> &mut [Vec3] {
    bytemuck::cast_slice_mut(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn slice_approx_eq(a: &[f32], b: &[f32]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| approx_eq(*x, *y))
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0, 4.0], &[2.0, 0.0, -1.0, 0.5]).unwrap(), 1.0);
        assert_eq!(dot(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
        assert_eq!(
            dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(MathError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_add_sub() {
        let u = [1.0, 2.0, 3.0, 4.0, 5.0];
        let v = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert_eq!(add(&u, &v).unwrap(), vec![6.0; 5]);
        assert_eq!(sub(&u, &v).unwrap(), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let err = add(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, MathError::DimensionMismatch { left: 2, right: 3 });
        assert!(sub(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(2.0, &[1.0, -2.0, 0.5]), vec![2.0, -4.0, 1.0]);
    }

    #[test]
    fn test_length_is_sum_of_squares() {
        // The sum of raw components here is 0, the norm is not
        assert!(approx_eq(length(&[3.0, -3.0, 4.0, -4.0]), 50.0f32.sqrt()));
        assert!(approx_eq(length(&[1.0, 1.0, 1.0, 1.0]), 2.0));
    }

    #[test]
    fn test_normalize() {
        let n = normalize(&[3.0, 0.0, 4.0, 0.0, 0.0]).unwrap();
        assert!(approx_eq(length(&n), 1.0));
        assert!(slice_approx_eq(&n, &[0.6, 0.0, 0.8, 0.0, 0.0]));
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        assert_eq!(normalize(&[0.0; 6]).unwrap_err(), MathError::DegenerateVector);
        assert_eq!(normalize3([0.0; 3]).unwrap_err(), MathError::DegenerateVector);
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = [1.0, 0.0, 7.0, 0.0];
        let r = rotate_in_plane(&v, FRAC_PI_2, AxisPair::new(0, 3)).unwrap();
        assert!(slice_approx_eq(&r, &[0.0, 0.0, 7.0, 1.0]), "got {:?}", r);
    }

    #[test]
    fn test_rotate_uses_original_components() {
        // A half turn negates both plane components; a partially updated
        // vector would not
        let r = rotate_in_plane(&[2.0, 3.0, 1.0], PI, AxisPair::new(0, 1)).unwrap();
        assert!(slice_approx_eq(&r, &[-2.0, -3.0, 1.0]), "got {:?}", r);
    }

    #[test]
    fn test_rotate_preserves_norm() {
        let v = [0.3, -1.2, 2.5, 0.7, -0.4];
        for step in 0..16 {
            let angle = step as f32 * 0.45;
            for (a, b) in [(0, 1), (2, 4), (4, 1), (3, 0)] {
                let r = rotate_in_plane(&v, angle, AxisPair::new(a, b)).unwrap();
                assert!(approx_eq(length(&r), length(&v)));
            }
        }
    }

    #[test]
    fn test_rotate_round_trip() {
        let v = [0.3, -1.2, 2.5, 0.7];
        let plane = AxisPair::new(1, 3);
        let there = rotate_in_plane(&v, 1.234, plane).unwrap();
        let back = rotate_in_plane(&there, -1.234, plane).unwrap();
        assert!(slice_approx_eq(&back, &v));
    }

    #[test]
    fn test_rotate_invalid_plane() {
        let v = [1.0, 2.0, 3.0];
        assert!(matches!(
            rotate_in_plane(&v, 1.0, AxisPair::new(0, 3)),
            Err(MathError::InvalidAxisPair { a: 0, b: 3, dimensions: 3 })
        ));
        assert!(rotate_in_plane(&v, 1.0, AxisPair::new(2, 2)).is_err());
    }

    #[test]
    fn test_mult_matrix_column_major() {
        // Columns: e1 -> (0, 1, 0), e2 -> (1, 0, 0), e3 -> (0, 0, 2)
        let m: MatN = vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 2.0],
        ];
        let r = mult_matrix(&m, &[3.0, 5.0, 7.0]).unwrap();
        assert_eq!(r, vec![5.0, 3.0, 14.0]);
    }

    #[test]
    fn test_mult_matrix_not_square() {
        let m: MatN = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        assert!(mult_matrix(&m, &[1.0, 2.0, 3.0]).is_err());
        let ragged: MatN = vec![vec![1.0, 0.0], vec![0.0]];
        assert!(mult_matrix(&ragged, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_points3_view() {
        let mut buffer = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(as_points3(&buffer), &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        as_points3_mut(&mut buffer)[1] = [0.0; 3];
        assert_eq!(buffer[3..], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_midpoint3() {
        assert_eq!(midpoint3([0.0, 2.0, -4.0], [2.0, 0.0, 4.0]), [1.0, 1.0, 0.0]);
    }
}
