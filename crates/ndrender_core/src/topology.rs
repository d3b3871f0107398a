//! Shape topology trait and generated mesh data
//!
//! A shape family (hypercube, hypertorus, complex graph) knows how to generate
//! its vertices in native N-dimensional coordinates together with a triangle
//! index buffer, and how to derive the secondary per-vertex attribute the
//! renderer consumes alongside position.

use crate::ShapeError;

/// Indices per logical face: two triangles of three vertices
pub const FACE_STRIDE: usize = 6;

/// Components of a projected position or secondary attribute
pub const ATTRIBUTE_STRIDE: usize = 3;

/// Mesh data produced once at construction
///
/// `vertices` is a flat arena of `vertex_count * dimensions` floats, indexed
/// `vertex * dimensions + component`. `indices` holds six entries per face.
#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    /// Dimensionality of every vertex
    pub dimensions: usize,
    /// Flat native-space vertex arena
    pub vertices: Vec<f32>,
    /// Triangle indices, grouped in sixes
    pub indices: Vec<u32>,
}

impl Topology {
    /// Create an empty topology with exact capacity
    pub fn with_capacity(dimensions: usize, vertex_count: usize, face_count: usize) -> Self {
        Self {
            dimensions,
            vertices: Vec::with_capacity(vertex_count * dimensions),
            indices: Vec::with_capacity(face_count * FACE_STRIDE),
        }
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.dimensions
    }

    /// Number of 6-index faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.indices.len() / FACE_STRIDE
    }

    /// Get one vertex
    #[inline]
    pub fn vertex(&self, index: usize) -> &[f32] {
        &self.vertices[index * self.dimensions..(index + 1) * self.dimensions]
    }

    /// Check the stride and index-range invariants
    pub fn is_consistent(&self) -> bool {
        let vertex_count = self.vertex_count();
        self.dimensions > 0
            && self.vertices.len() % self.dimensions == 0
            && self.indices.len() % FACE_STRIDE == 0
            && self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }
}

/// A shape family that can be turned into a renderable mesh
///
/// Implementors are pure descriptions: they hold construction parameters only
/// and generate fresh buffers on request.
pub trait ShapeTopology: Send + Sync {
    /// Human-readable family name, used in logs and errors
    fn name(&self) -> &'static str;

    /// Dimensionality of the native vertex space
    fn dimensions(&self) -> usize;

    /// Number of vertices [`generate`](Self::generate) produces
    fn vertex_count(&self) -> usize;

    /// Number of 6-index faces [`generate`](Self::generate) produces
    fn face_count(&self) -> usize;

    /// Generate vertices and indices
    fn generate(&self) -> Result<Topology, ShapeError>;

    /// Fill `out` (three floats per vertex) with the secondary attribute
    ///
    /// `projected` holds the current 3D positions and `indices` the current
    /// (possibly depth-sorted) index buffer.
    fn compute_secondary_attributes(&self, projected: &[f32], indices: &[u32], out: &mut [f32]);

    /// Whether the secondary attribute is independent of the projection
    ///
    /// Static attributes are computed once at construction instead of every
    /// frame.
    fn secondary_is_static(&self) -> bool {
        false
    }
}

/// Convert a vertex count to the index type, rejecting overflow
pub(crate) fn checked_vertex_count(
    shape: &'static str,
    count: Option<usize>,
) -> Result<usize, ShapeError> {
    match count {
        Some(n) if n <= u32::MAX as usize => Ok(n),
        _ => Err(ShapeError::TooManyVertices { shape }),
    }
}
