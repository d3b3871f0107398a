//! Secondary vertex attributes derived from projected geometry
//!
//! Polyhedral shapes are flat shaded: each face's normal is computed in
//! projected 3D space and written to every vertex the face references. Since
//! the projection is non-linear the normals change with every rotation and
//! are recomputed each frame.

use ndrender_math::vecn::{as_points3, as_points3_mut, cross, normalize3, sub3};

use crate::topology::FACE_STRIDE;

/// Write flat face normals for every 6-index face into `out`
///
/// The normal of a face is `normalize(cross(v2 - v1, v3 - v1))` over its first
/// triangle. A face whose triangle has collapsed to a line or point gets the
/// zero vector. Vertices shared between faces keep the normal of the last face
/// that references them.
///
/// Returns the number of degenerate faces.
pub fn flat_normals(projected: &[f32], indices: &[u32], out: &mut [f32]) -> usize {
    debug_assert_eq!(projected.len(), out.len());
    debug_assert_eq!(indices.len() % FACE_STRIDE, 0);

    let points = as_points3(projected);
    let normals = as_points3_mut(out);
    let mut degenerate = 0;

    for face in indices.chunks_exact(FACE_STRIDE) {
        let v1 = points[face[0] as usize];
        let v2 = points[face[1] as usize];
        let v3 = points[face[2] as usize];

        let normal = normalize3(cross(sub3(v2, v1), sub3(v3, v1))).unwrap_or_else(|_| {
            degenerate += 1;
            [0.0; 3]
        });

        for &i in face {
            normals[i as usize] = normal;
        }
    }

    degenerate
}
