//! N-dimensional hypertorus surface
//!
//! The surface is built by nesting circles. A base circle of radius 1 lies in
//! the XY plane. Each further axis `a` sweeps every point so far around a
//! smaller circle of radius `1 / 2^(a-1)` lying in the plane spanned by the
//! direction of the previous sweep and the new axis. With D axes that is
//! D-1 nested circles and `S^(D-1)` vertices for smoothness `S`.
//!
//! Vertex order: the base circle's sample index varies slowest and the sweep
//! around the last axis fastest, so the vertex array is a (D-1)-dimensional
//! grid of side `S`.

use ndrender_math::vecn::{add, mult_matrix, normalize, MatN};

use crate::attributes::flat_normals;
use crate::topology::{checked_vertex_count, ShapeTopology, Topology};
use crate::ShapeError;

/// A (D-1)-fold nested torus surface in D-space
#[derive(Clone, Debug, PartialEq)]
pub struct Hypertorus {
    dimensions: usize,
    smoothness: usize,
    vertex_count: usize,
}

impl Hypertorus {
    /// Smallest supported dimensionality (the ordinary torus)
    pub const MIN_DIMENSIONS: usize = 3;
    /// Smallest number of samples per circle
    pub const MIN_SMOOTHNESS: usize = 3;
    /// Samples per circle used when none is configured
    pub const DEFAULT_SMOOTHNESS: usize = 10;

    /// Create a hypertorus description
    pub fn new(dimensions: usize, smoothness: usize) -> Result<Self, ShapeError> {
        if dimensions < Self::MIN_DIMENSIONS {
            return Err(ShapeError::InvalidDimensions {
                shape: "hypertorus",
                dimensions,
                minimum: Self::MIN_DIMENSIONS,
            });
        }
        if smoothness < Self::MIN_SMOOTHNESS {
            return Err(ShapeError::InvalidSmoothness(smoothness));
        }

        let count = u32::try_from(dimensions - 1)
            .ok()
            .and_then(|exp| smoothness.checked_pow(exp))
            .and_then(|v| v.checked_mul(dimensions - 2).map(|_| v));
        let vertex_count = checked_vertex_count("hypertorus", count)?;

        Ok(Self { dimensions, smoothness, vertex_count })
    }

    /// Samples per circle
    #[inline]
    pub fn smoothness(&self) -> usize {
        self.smoothness
    }

    /// Radius of the circle swept around `axis`
    pub fn sweep_radius(axis: usize) -> f32 {
        if axis < 2 {
            1.0
        } else {
            0.5f32.powi(axis as i32 - 1)
        }
    }

    /// Upper bound on the distance of any vertex from the origin
    pub fn bounding_radius(&self) -> f32 {
        (1..self.dimensions).map(Self::sweep_radius).sum()
    }

    /// (cos, sin) of the `i`-th sample angle
    fn sample(&self, i: usize) -> (f32, f32) {
        let angle = i as f32 * std::f32::consts::TAU / self.smoothness as f32;
        (angle.cos(), angle.sin())
    }

    /// Basis mapping the XY plane onto the plane of the sweep around `axis`
    ///
    /// Column 0 is the previous sweep's direction, column 1 the unit vector
    /// along `axis`.
    fn sweep_basis(&self, axis: usize, direction: &[f32]) -> MatN {
        let mut basis = vec![vec![0.0; self.dimensions]; self.dimensions];
        basis[0].copy_from_slice(direction);
        basis[1][axis] = 1.0;
        basis
    }

    /// Sweep `point` around the circle for `axis`, recursing until the last
    /// axis and appending each finished point to `out`
    fn sweep(
        &self,
        axis: usize,
        point: &[f32],
        previous_offset: &[f32],
        out: &mut Vec<f32>,
    ) -> Result<(), ShapeError> {
        let basis = self.sweep_basis(axis, &normalize(previous_offset)?);
        let radius = Self::sweep_radius(axis);
        let mut circle = vec![0.0; self.dimensions];

        for i in 0..self.smoothness {
            let (cos, sin) = self.sample(i);
            circle[0] = cos * radius;
            circle[1] = sin * radius;

            let offset = mult_matrix(&basis, &circle)?;
            let next = add(point, &offset)?;

            if axis + 1 == self.dimensions {
                out.extend_from_slice(&next);
            } else {
                self.sweep(axis + 1, &next, &offset, out)?;
            }
        }
        Ok(())
    }

    /// Connect grid neighbours across each pair of adjacent ring levels
    fn generate_indices(&self, indices: &mut Vec<u32>) {
        let s = self.smoothness;
        let n = self.vertex_count;

        for dim in 3..=self.dimensions {
            let block = s.pow(dim as u32 - 1);
            let near = s.pow(dim as u32 - 3);
            let far = s.pow(dim as u32 - 2);

            for i in 0..n {
                let base = i / block * block;
                let wrap = |offset: usize| (base + (i + offset) % block) as u32;

                indices.extend_from_slice(&[
                    i as u32,
                    wrap(near),
                    wrap(far),
                    wrap(near),
                    wrap(near + far),
                    wrap(far),
                ]);
            }
        }
    }
}

impl ShapeTopology for Hypertorus {
    fn name(&self) -> &'static str {
        "hypertorus"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn face_count(&self) -> usize {
        self.vertex_count * (self.dimensions - 2)
    }

    fn generate(&self) -> Result<Topology, ShapeError> {
        let mut topology =
            Topology::with_capacity(self.dimensions, self.vertex_count, self.face_count());

        let mut base = vec![0.0; self.dimensions];
        for i in 0..self.smoothness {
            let (cos, sin) = self.sample(i);
            base[0] = cos;
            base[1] = sin;
            self.sweep(2, &base, &base, &mut topology.vertices)?;
        }
        self.generate_indices(&mut topology.indices);

        debug_assert_eq!(topology.vertex_count(), self.vertex_count);
        debug_assert_eq!(topology.face_count(), self.face_count());
        Ok(topology)
    }

    fn compute_secondary_attributes(&self, projected: &[f32], indices: &[u32], out: &mut [f32]) {
        let degenerate = flat_normals(projected, indices, out);
        if degenerate > 0 {
            log::trace!("hypertorus: {} faces projected edge-on", degenerate);
        }
    }
}
