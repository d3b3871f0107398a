//! Serializable shape templates
//!
//! ShapeTemplate is the closed set of supported shape families. Each variant
//! stores the parameters needed to build the family's topology, so a template
//! can live in a config file or preset and be turned into a [`Shape`] on
//! demand.

use serde::{Deserialize, Serialize};

use crate::{ComplexGraph, Hypercube, Hypertorus, Shape, ShapeError, ShapeTopology};

fn default_smoothness() -> usize {
    Hypertorus::DEFAULT_SMOOTHNESS
}

fn default_density() -> usize {
    ComplexGraph::DEFAULT_DENSITY
}

fn default_view_size() -> f32 {
    ComplexGraph::DEFAULT_VIEW_SIZE
}

/// Serializable shape template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// The surface of a D-cube: every square face, vertices at ±1
    Hypercube {
        /// Number of dimensions (at least 3)
        dimensions: usize,
    },
    /// Nested circle sweep producing a (D-1)-torus surface
    Hypertorus {
        /// Number of dimensions (at least 3)
        dimensions: usize,
        /// Samples per circle (at least 3)
        #[serde(default = "default_smoothness")]
        smoothness: usize,
    },
    /// Graph of `z²` over a square of the complex plane, always 4D
    ComplexGraph {
        /// Samples per side of the grid (at least 2)
        #[serde(default = "default_density")]
        density: usize,
        /// Side length of the sampled square
        #[serde(default = "default_view_size")]
        view_size: f32,
    },
}

impl ShapeTemplate {
    /// Create a hypercube template
    pub fn hypercube(dimensions: usize) -> Self {
        ShapeTemplate::Hypercube { dimensions }
    }

    /// Create a hypertorus template
    pub fn hypertorus(dimensions: usize, smoothness: usize) -> Self {
        ShapeTemplate::Hypertorus { dimensions, smoothness }
    }

    /// Create a complex graph template
    pub fn complex_graph(density: usize, view_size: f32) -> Self {
        ShapeTemplate::ComplexGraph { density, view_size }
    }

    /// Dimensionality of the shape this template creates
    pub fn dimensions(&self) -> usize {
        match self {
            ShapeTemplate::Hypercube { dimensions } => *dimensions,
            ShapeTemplate::Hypertorus { dimensions, .. } => *dimensions,
            ShapeTemplate::ComplexGraph { .. } => ComplexGraph::DIMENSIONS,
        }
    }

    /// Validate the parameters and build the topology generator
    pub fn create_topology(&self) -> Result<Box<dyn ShapeTopology>, ShapeError> {
        Ok(match self {
            ShapeTemplate::Hypercube { dimensions } => Box::new(Hypercube::new(*dimensions)?),
            ShapeTemplate::Hypertorus { dimensions, smoothness } => {
                Box::new(Hypertorus::new(*dimensions, *smoothness)?)
            }
            ShapeTemplate::ComplexGraph { density, view_size } => {
                Box::new(ComplexGraph::new(*density, *view_size)?)
            }
        })
    }

    /// Build the shape
    pub fn create_shape(&self, projection_constant: f32) -> Result<Shape, ShapeError> {
        Shape::new(self.create_topology()?, projection_constant)
    }
}

impl Default for ShapeTemplate {
    fn default() -> Self {
        ShapeTemplate::hypercube(4)
    }
}
