//! Back-to-front face ordering for transparent rendering
//!
//! Painter's algorithm: faces farther from the viewer are drawn first so that
//! alpha blending composites nearer faces over them. Each face's depth is
//! approximated by the distance from the viewer to one representative point.
//!
//! Sorting is an opt-in per-frame stage. At high face counts it costs more
//! than the rest of the frame.

use ndrender_math::vecn::{as_points3, length, midpoint3, Vec3};

use crate::topology::FACE_STRIDE;

/// Representative point of one 6-index face
///
/// For a quad split into two triangles this is the midpoint of the shared
/// diagonal. If the two triangles do not share exactly two vertices the
/// centroid of the first triangle is used instead.
pub fn representative_point(points: &[Vec3], face: &[u32]) -> Vec3 {
    debug_assert_eq!(face.len(), FACE_STRIDE);
    let (first, second) = face.split_at(3);

    let mut shared = [0u32; 2];
    let mut shared_count = 0;
    for (i, &index) in first.iter().enumerate() {
        if second.contains(&index) && !first[..i].contains(&index) {
            if shared_count < 2 {
                shared[shared_count] = index;
            }
            shared_count += 1;
        }
    }

    if shared_count == 2 {
        midpoint3(points[shared[0] as usize], points[shared[1] as usize])
    } else {
        let [a, b, c] = [first[0], first[1], first[2]].map(|i| points[i as usize]);
        [
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
            (a[2] + b[2] + c[2]) / 3.0,
        ]
    }
}

/// Depth of every face as seen from a viewer `view_distance` along +Z
///
/// The view distance is subtracted from the representative point's z
/// component before measuring its distance from the origin.
pub fn face_depths(projected: &[f32], indices: &[u32], view_distance: f32) -> Vec<f32> {
    let points = as_points3(projected);
    indices
        .chunks_exact(FACE_STRIDE)
        .map(|face| {
            let [x, y, z] = representative_point(points, face);
            length(&[x, y, z - view_distance])
        })
        .collect()
}

/// Reorder 6-index faces by descending depth
///
/// Whole faces move together and keep their internal winding. Faces with
/// equal depth keep their relative order.
pub fn sort_faces_by_depth(indices: &mut [u32], depths: &[f32]) {
    debug_assert_eq!(indices.len(), depths.len() * FACE_STRIDE);

    let mut order: Vec<usize> = (0..depths.len()).collect();
    order.sort_by(|&a, &b| depths[b].total_cmp(&depths[a]));

    let sorted: Vec<u32> = order
        .iter()
        .flat_map(|&face| indices[face * FACE_STRIDE..(face + 1) * FACE_STRIDE].iter().copied())
        .collect();
    indices.copy_from_slice(&sorted);
}

/// Compute depths and sort the faces of a projected mesh in one pass
pub fn sort_faces(projected: &[f32], indices: &mut [u32], view_distance: f32) {
    let depths = face_depths(projected, indices, view_distance);
    sort_faces_by_depth(indices, &depths);
}
