//! N-dimensional hypercube surface
//!
//! Every 2D square face of a D-cube is picked out by choosing two "free" axes
//! for the square's plane and locking the remaining D-2 axes at -1 or +1.
//! That gives C(D, 2) * 2^(D-2) faces: 24 for the tesseract, 80 for the
//! 5-cube.
//!
//! Faces are emitted with their own four vertices (corners are not shared
//! between faces) so each face can carry its own flat normal.

use crate::attributes::flat_normals;
use crate::topology::{checked_vertex_count, ShapeTopology, Topology};
use crate::ShapeError;

/// Corners of a face on its two free axes, in edge-adjacent cyclic order
const FACE_CORNERS: [[f32; 2]; 4] = [[-1.0, -1.0], [-1.0, 1.0], [1.0, 1.0], [1.0, -1.0]];

/// Two triangles over the four corners
const FACE_TRIANGLES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// A D-dimensional hypercube with vertices at ±1 on every axis
#[derive(Clone, Debug, PartialEq)]
pub struct Hypercube {
    dimensions: usize,
    face_count: usize,
}

impl Hypercube {
    /// Smallest supported dimensionality (the ordinary cube)
    pub const MIN_DIMENSIONS: usize = 3;

    /// Create a hypercube description
    pub fn new(dimensions: usize) -> Result<Self, ShapeError> {
        if dimensions < Self::MIN_DIMENSIONS {
            return Err(ShapeError::InvalidDimensions {
                shape: "hypercube",
                dimensions,
                minimum: Self::MIN_DIMENSIONS,
            });
        }

        let face_count = u32::try_from(dimensions - 2)
            .ok()
            .and_then(|locked| 2usize.checked_pow(locked))
            .and_then(|signs| binomial(dimensions, 2).checked_mul(signs));
        let vertices = checked_vertex_count("hypercube", face_count.and_then(|f| f.checked_mul(4)))?;

        Ok(Self { dimensions, face_count: vertices / 4 })
    }
}

impl ShapeTopology for Hypercube {
    fn name(&self) -> &'static str {
        "hypercube"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn vertex_count(&self) -> usize {
        self.face_count * 4
    }

    fn face_count(&self) -> usize {
        self.face_count
    }

    fn generate(&self) -> Result<Topology, ShapeError> {
        let d = self.dimensions;
        let mut topology = Topology::with_capacity(d, self.vertex_count(), self.face_count);

        let mut locked_axes: Vec<usize> = (0..d - 2).collect();
        let mut signs = vec![-1.0f32; d - 2];
        let mut corner = vec![0.0f32; d];

        loop {
            let [free_a, free_b] = free_axes(&locked_axes, d);

            signs.fill(-1.0);
            loop {
                for (&axis, &sign) in locked_axes.iter().zip(&signs) {
                    corner[axis] = sign;
                }

                let first = (topology.vertices.len() / d) as u32;
                for [a, b] in FACE_CORNERS {
                    corner[free_a] = a;
                    corner[free_b] = b;
                    topology.vertices.extend_from_slice(&corner);
                }
                topology.indices.extend(FACE_TRIANGLES.iter().map(|i| first + i));

                if !next_sign_assignment(&mut signs) {
                    break;
                }
            }

            if !next_locked_axes(&mut locked_axes, d) {
                break;
            }
        }

        debug_assert_eq!(topology.face_count(), self.face_count);
        Ok(topology)
    }

    fn compute_secondary_attributes(&self, projected: &[f32], indices: &[u32], out: &mut [f32]) {
        let degenerate = flat_normals(projected, indices, out);
        if degenerate > 0 {
            log::trace!("hypercube: {} faces projected edge-on", degenerate);
        }
    }
}

/// Binomial coefficient C(n, k)
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Advance a sorted combination of axis indices to its lexicographic successor
///
/// Finds the rightmost slot that can still be incremented without running
/// into the slots after it, increments it and resets every slot to its right
/// to consecutive values. Returns `false` once the last combination has been
/// reached.
pub fn next_locked_axes(axes: &mut [usize], dimensions: usize) -> bool {
    let k = axes.len();
    for i in (0..k).rev() {
        if axes[i] < dimensions - k + i {
            axes[i] += 1;
            for j in i + 1..k {
                axes[j] = axes[i] + j - i;
            }
            return true;
        }
    }
    false
}

/// Advance a ±1 sign assignment in binary counting order
///
/// The lowest slot at -1 becomes +1 and every slot below it is reset to -1.
/// Returns `false` when every slot is already +1.
pub fn next_sign_assignment(signs: &mut [f32]) -> bool {
    match signs.iter().position(|&s| s < 0.0) {
        Some(i) => {
            signs[i] = 1.0;
            signs[..i].fill(-1.0);
            true
        }
        None => false,
    }
}

/// The two axes not in `locked`, in ascending order
fn free_axes(locked: &[usize], dimensions: usize) -> [usize; 2] {
    let mut free = (0..dimensions).filter(|axis| !locked.contains(axis));
    let a = free.next().unwrap_or(0);
    let b = free.next().unwrap_or(1);
    [a, b]
}
