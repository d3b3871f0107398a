//! Shape kernel for ndrender
//!
//! This crate turns N-dimensional shapes into renderer-ready 3D buffers:
//!
//! - [`ShapeTopology`] - Generator contract implemented by every shape family
//! - [`Hypercube`], [`Hypertorus`], [`ComplexGraph`] - The built-in families
//! - [`Shape`] - Native vertices plus the per-frame projection pipeline
//! - [`FrameBuffers`] - Borrowed view of one frame's positions, attributes and indices
//! - [`RotationSchedule`] - Planes and angular velocities applied every frame
//! - [`Session`] - A shape animated by a schedule
//! - [`ShapeTemplate`] - Serializable shape template
//! - [`Preset`] - Loadable/saveable session description

mod attributes;
mod complex_graph;
mod error;
pub mod face_sort;
pub mod hypercube;
mod hypertorus;
mod preset;
mod schedule;
mod session;
mod shape;
mod shapes;
mod topology;

pub use attributes::flat_normals;
pub use complex_graph::{Complex, ComplexGraph};
pub use error::ShapeError;
pub use hypercube::Hypercube;
pub use hypertorus::Hypertorus;
pub use preset::{Preset, PresetLoadError, PresetSaveError};
pub use schedule::{RotationEntry, RotationSchedule};
pub use session::Session;
pub use shape::{FrameBuffers, Shape, DEFAULT_PROJECTION_CONSTANT, DEFAULT_VIEW_DISTANCE};
pub use shapes::ShapeTemplate;
pub use topology::{ShapeTopology, Topology, ATTRIBUTE_STRIDE, FACE_STRIDE};

// Re-export commonly used types from ndrender_math for convenience
pub use ndrender_math::{AxisPair, MathError};
