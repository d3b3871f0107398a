//! Graph of the complex squaring map
//!
//! The graph of `w = z²` is a 2D surface in the 4D space `(Re z, Im z, Re w, Im w)`.
//! It is sampled on a regular grid and colored by the map's derivative
//! `dw/dz = 2z`, pushed through `sin²` so every channel lands in `[0, 1]`.

use serde::{Deserialize, Serialize};

use ndrender_math::vecn::as_points3_mut;

use crate::topology::{checked_vertex_count, ShapeTopology, Topology};
use crate::ShapeError;

/// A complex number
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f32,
    pub im: f32,
}

impl Complex {
    /// Create a new complex number
    #[inline]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// `self²`
    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    /// Multiply by a real scalar
    #[inline]
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.re * k, self.im * k)
    }

    /// Modulus `|z|`
    #[inline]
    pub fn modulus(self) -> f32 {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

/// The surface `(x, y, Re z², Im z²)` over an `N × N` grid
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexGraph {
    density: usize,
    view_size: f32,
}

impl ComplexGraph {
    /// The graph always lives in 4-space
    pub const DIMENSIONS: usize = 4;
    /// Smallest grid that still has a quad
    pub const MIN_DENSITY: usize = 2;
    /// Samples per side used when none is configured
    pub const DEFAULT_DENSITY: usize = 50;
    /// Side length of the sampled square used when none is configured
    pub const DEFAULT_VIEW_SIZE: f32 = 1.5;

    /// Create a complex graph description
    ///
    /// `density` is the number of samples per side, `view_size` the side
    /// length of the square region of the complex plane around the origin.
    pub fn new(density: usize, view_size: f32) -> Result<Self, ShapeError> {
        if density < Self::MIN_DENSITY {
            return Err(ShapeError::InvalidGridDensity(density));
        }
        checked_vertex_count("complex graph", density.checked_mul(density))?;
        Ok(Self { density, view_size })
    }

    /// Samples per side
    #[inline]
    pub fn density(&self) -> usize {
        self.density
    }

    /// The sample at grid row `r`, column `c`
    pub fn sample(&self, r: usize, c: usize) -> Complex {
        let n = self.density as f32;
        Complex::new(
            (r as f32 - n / 2.0) / n * self.view_size,
            (c as f32 - n / 2.0) / n * self.view_size,
        )
    }

    /// Derivative-based pseudo-color for a sample
    pub fn color(z: Complex) -> [f32; 3] {
        let derivative = z.scale(2.0);
        [
            derivative.re.sin().powi(2),
            derivative.im.sin().powi(2),
            derivative.modulus().sin().powi(2),
        ]
    }

    #[inline]
    fn index(&self, r: usize, c: usize) -> u32 {
        (r * self.density + c) as u32
    }
}

impl ShapeTopology for ComplexGraph {
    fn name(&self) -> &'static str {
        "complex graph"
    }

    fn dimensions(&self) -> usize {
        Self::DIMENSIONS
    }

    fn vertex_count(&self) -> usize {
        self.density * self.density
    }

    fn face_count(&self) -> usize {
        (self.density - 1) * (self.density - 1)
    }

    fn generate(&self) -> Result<Topology, ShapeError> {
        let mut topology =
            Topology::with_capacity(Self::DIMENSIONS, self.vertex_count(), self.face_count());

        for r in 0..self.density {
            for c in 0..self.density {
                let z = self.sample(r, c);
                let w = z.square();
                topology.vertices.extend_from_slice(&[z.re, z.im, w.re, w.im]);
            }
        }

        for r in 0..self.density - 1 {
            for c in 0..self.density - 1 {
                topology.indices.extend_from_slice(&[
                    self.index(r, c),
                    self.index(r + 1, c),
                    self.index(r + 1, c + 1),
                    self.index(r, c),
                    self.index(r, c + 1),
                    self.index(r + 1, c + 1),
                ]);
            }
        }

        Ok(topology)
    }

    fn compute_secondary_attributes(&self, _projected: &[f32], _indices: &[u32], out: &mut [f32]) {
        let colors = as_points3_mut(out);
        for r in 0..self.density {
            for c in 0..self.density {
                colors[r * self.density + c] = Self::color(self.sample(r, c));
            }
        }
    }

    fn secondary_is_static(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_complex_square() {
        let w = Complex::new(3.0, 2.0).square();
        assert_eq!(w, Complex::new(5.0, 12.0));
        assert_eq!(Complex::new(3.0, 4.0).modulus(), 5.0);
    }

    #[test]
    fn test_rejects_tiny_grid() {
        assert_eq!(ComplexGraph::new(1, 1.5), Err(ShapeError::InvalidGridDensity(1)));
    }

    #[test]
    fn test_fifty_by_fifty_grid() {
        let graph = ComplexGraph::new(50, 1.5).unwrap();
        let t = graph.generate().unwrap();

        assert_eq!(t.dimensions, 4);
        assert_eq!(t.vertex_count(), 2500);
        assert_eq!(t.indices.len() / 3, 49 * 49 * 2);
        assert_eq!(t.face_count(), 49 * 49);
        assert!(t.is_consistent());

        for v in 0..t.vertex_count() {
            let p = t.vertex(v);
            let (x, y) = (p[0], p[1]);
            assert!((p[2] - (x * x - y * y)).abs() < EPSILON);
            assert!((p[3] - 2.0 * x * y).abs() < EPSILON);
        }
    }

    #[test]
    fn test_grid_layout() {
        let graph = ComplexGraph::new(4, 2.0).unwrap();
        // (r - N/2) / N * size with N = 4, size = 2
        assert_eq!(graph.sample(0, 0), Complex::new(-1.0, -1.0));
        assert_eq!(graph.sample(2, 3), Complex::new(0.0, 0.5));

        let t = graph.generate().unwrap();
        assert_eq!(t.vertex(4 + 2)[..2], [-0.5, 0.0]);
    }

    #[test]
    fn test_quad_triangulation() {
        let graph = ComplexGraph::new(3, 1.0).unwrap();
        let t = graph.generate().unwrap();
        // Quad (0, 0): (0,0)-(1,0)-(1,1) and (0,0)-(0,1)-(1,1)
        assert_eq!(&t.indices[..6], &[0, 3, 4, 0, 1, 4]);
        // Quad (1, 1)
        assert_eq!(&t.indices[18..24], &[4, 7, 8, 4, 5, 8]);
    }

    #[test]
    fn test_colors_bounded() {
        let graph = ComplexGraph::new(20, 6.0).unwrap();
        let mut out = vec![-1.0; 20 * 20 * 3];
        graph.compute_secondary_attributes(&[], &[], &mut out);
        assert!(out.iter().all(|&c| (0.0..=1.0).contains(&c)));
    }

    #[test]
    fn test_color_from_derivative() {
        // z = 0.25 + 0i: dw/dz = 0.5
        let color = ComplexGraph::color(Complex::new(0.25, 0.0));
        let expected = 0.5f32.sin().powi(2);
        assert!((color[0] - expected).abs() < EPSILON);
        assert_eq!(color[1], 0.0);
        assert!((color[2] - expected).abs() < EPSILON);
    }

    #[test]
    fn test_colors_idempotent() {
        let graph = ComplexGraph::new(5, 1.5).unwrap();
        let mut first = vec![0.0; 75];
        let mut second = vec![0.0; 75];
        graph.compute_secondary_attributes(&[], &[], &mut first);
        graph.compute_secondary_attributes(&[1.0; 75], &[0, 1, 2, 0, 1, 2], &mut second);
        assert_eq!(first, second);
    }
}
