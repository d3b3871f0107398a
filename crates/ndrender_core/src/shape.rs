//! A projected, animatable N-dimensional shape
//!
//! [`Shape`] owns every buffer of one shape instance:
//!
//! - native vertices, `dimensions` floats each, rotated in place every frame
//! - projected 3D positions, recomputed from the native vertices every frame
//! - the secondary attribute (normal or color), three floats per vertex
//! - the triangle index buffer, six indices per face
//!
//! Topology is generated once at construction and never changes. Only the
//! order of faces in the index buffer changes, when depth sorting is enabled.

use ndrender_math::{project_all, vecn, AxisPair, PlaneRotation};

use crate::face_sort::sort_faces;
use crate::topology::{ShapeTopology, ATTRIBUTE_STRIDE};
use crate::ShapeError;

/// Projection constant used when none is configured
pub const DEFAULT_PROJECTION_CONSTANT: f32 = 3.0;

/// Viewer distance used by depth sorting when none is configured
pub const DEFAULT_VIEW_DISTANCE: f32 = 10.0;

/// The three buffers handed to the renderer each frame
#[derive(Clone, Copy, Debug)]
pub struct FrameBuffers<'a> {
    /// Projected positions, three floats per vertex
    pub positions: &'a [f32],
    /// Secondary attribute, three floats per vertex
    pub secondary: &'a [f32],
    /// Triangle indices
    pub indices: &'a [u32],
}

impl<'a> FrameBuffers<'a> {
    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / ATTRIBUTE_STRIDE
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw bytes of the position buffer
    pub fn position_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.positions)
    }

    /// Raw bytes of the secondary attribute buffer
    pub fn secondary_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.secondary)
    }

    /// Raw bytes of the index buffer
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }

    /// All positions followed by all secondary attributes, in one array
    ///
    /// The secondary attribute starts at [`Self::secondary_offset_bytes`].
    pub fn packed_vertex_data(&self) -> Vec<f32> {
        let mut packed = Vec::with_capacity(self.positions.len() + self.secondary.len());
        packed.extend_from_slice(self.positions);
        packed.extend_from_slice(self.secondary);
        packed
    }

    /// Byte offset of the secondary attribute inside [`Self::packed_vertex_data`]
    #[inline]
    pub fn secondary_offset_bytes(&self) -> usize {
        std::mem::size_of_val(self.positions)
    }
}

/// An N-dimensional shape with its render buffers
pub struct Shape {
    topology: Box<dyn ShapeTopology>,
    dimensions: usize,
    projection_constant: f32,
    view_distance: f32,
    depth_sort: bool,
    native_vertices: Vec<f32>,
    projected_vertices: Vec<f32>,
    /// Projection target, published by swapping with `projected_vertices`
    staging: Vec<f32>,
    secondary_attributes: Vec<f32>,
    indices: Vec<u32>,
}

impl Shape {
    /// Generate a shape's topology and project it once
    ///
    /// `projection_constant` is the camera's distance to the hyperplane of
    /// projection. It must be greater than 1 and should exceed the shape's
    /// extent along every axis; a constant that does not is accepted with a
    /// warning, since the shape may still project cleanly at most rotations.
    pub fn new(
        topology: Box<dyn ShapeTopology>,
        projection_constant: f32,
    ) -> Result<Self, ShapeError> {
        if !projection_constant.is_finite() || projection_constant <= 1.0 {
            return Err(ShapeError::InvalidProjectionConstant(projection_constant));
        }

        let generated = topology.generate()?;
        debug_assert!(generated.is_consistent());
        debug_assert_eq!(generated.dimensions, topology.dimensions());

        let dimensions = generated.dimensions;
        let vertex_count = generated.vertex_count();
        log::debug!(
            "Generated {}D {}: {} vertices, {} faces",
            dimensions,
            topology.name(),
            vertex_count,
            generated.face_count()
        );

        let mut shape = Self {
            topology,
            dimensions,
            projection_constant,
            view_distance: DEFAULT_VIEW_DISTANCE,
            depth_sort: false,
            native_vertices: generated.vertices,
            projected_vertices: Vec::with_capacity(vertex_count * ATTRIBUTE_STRIDE),
            staging: Vec::with_capacity(vertex_count * ATTRIBUTE_STRIDE),
            secondary_attributes: vec![0.0; vertex_count * ATTRIBUTE_STRIDE],
            indices: generated.indices,
        };

        let extent = shape.max_extent();
        if projection_constant <= extent {
            log::warn!(
                "Projection constant {} does not exceed the {} extent {:.3}; \
                 some rotations may hit a projection singularity",
                projection_constant,
                shape.topology.name(),
                extent
            );
        }

        if shape.topology.secondary_is_static() {
            shape.topology.compute_secondary_attributes(
                &[],
                &shape.indices,
                &mut shape.secondary_attributes,
            );
        }
        shape.update()?;
        Ok(shape)
    }

    /// Set the viewer distance used for depth sorting
    pub fn with_view_distance(mut self, view_distance: f32) -> Self {
        self.view_distance = view_distance;
        self
    }

    /// Enable or disable per-frame back-to-front face sorting
    pub fn with_depth_sort(mut self, enabled: bool) -> Self {
        self.depth_sort = enabled;
        self
    }

    /// Enable or disable per-frame back-to-front face sorting
    pub fn set_depth_sort(&mut self, enabled: bool) {
        self.depth_sort = enabled;
    }

    /// Rotate every native vertex by `angle` radians in `plane`
    ///
    /// A non-finite angle is rejected before any vertex is touched.
    pub fn rotate(&mut self, angle: f32, plane: AxisPair) -> Result<(), ShapeError> {
        if !angle.is_finite() {
            return Err(ShapeError::InvalidAngle(angle));
        }
        let rotation = PlaneRotation::new(angle, plane.validate(self.dimensions)?);
        for vertex in self.native_vertices.chunks_exact_mut(self.dimensions) {
            rotation.apply(vertex);
        }
        Ok(())
    }

    /// Recompute projected positions and secondary attributes
    ///
    /// Runs the per-frame pipeline: project → secondary attributes →
    /// optional depth sort. If the projection fails the previous frame's
    /// buffers are left untouched.
    pub fn update(&mut self) -> Result<FrameBuffers<'_>, ShapeError> {
        project_all(
            &self.native_vertices,
            self.dimensions,
            self.projection_constant,
            &mut self.staging,
        )?;
        std::mem::swap(&mut self.projected_vertices, &mut self.staging);

        if !self.topology.secondary_is_static() {
            self.topology.compute_secondary_attributes(
                &self.projected_vertices,
                &self.indices,
                &mut self.secondary_attributes,
            );
        }

        if self.depth_sort {
            sort_faces(&self.projected_vertices, &mut self.indices, self.view_distance);
        }

        Ok(self.buffers())
    }

    /// The buffers as of the last successful [`update`](Self::update)
    pub fn buffers(&self) -> FrameBuffers<'_> {
        FrameBuffers {
            positions: &self.projected_vertices,
            secondary: &self.secondary_attributes,
            indices: &self.indices,
        }
    }

    /// Shape family name
    #[inline]
    pub fn name(&self) -> &'static str {
        self.topology.name()
    }

    /// Dimensionality of the native vertices
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.native_vertices.len() / self.dimensions
    }

    /// Number of 6-index faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.topology.face_count()
    }

    /// The projection constant
    #[inline]
    pub fn projection_constant(&self) -> f32 {
        self.projection_constant
    }

    /// Whether depth sorting runs every frame
    #[inline]
    pub fn depth_sort(&self) -> bool {
        self.depth_sort
    }

    /// Flat native vertex arena
    #[inline]
    pub fn native_vertices(&self) -> &[f32] {
        &self.native_vertices
    }

    /// One native vertex
    #[inline]
    pub fn vertex(&self, index: usize) -> &[f32] {
        &self.native_vertices[index * self.dimensions..(index + 1) * self.dimensions]
    }

    /// Largest distance of any native vertex from the origin
    ///
    /// Rotations preserve this, so it bounds every coordinate at every frame.
    pub fn max_extent(&self) -> f32 {
        self.native_vertices
            .chunks_exact(self.dimensions)
            .map(vecn::length)
            .fold(0.0, f32::max)
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("name", &self.name())
            .field("dimensions", &self.dimensions)
            .field("vertices", &self.vertex_count())
            .field("faces", &self.face_count())
            .field("projection_constant", &self.projection_constant)
            .field("depth_sort", &self.depth_sort)
            .finish()
    }
}
