//! N-dimensional Mathematics Library
//!
//! This crate provides the dimension-agnostic vector math used by the
//! ndrender kernel. Vectors are plain `f32` slices so a single code path
//! serves every dimensionality.
//!
//! ## Core Items
//!
//! - [`vecn`] - add, subtract, scale, length, normalize, cross, in-plane rotation,
//!   matrix-vector product
//! - [`AxisPair`] - a rotation plane named by two coordinate axes
//! - [`PlaneRotation`] - a plane rotation with precomputed sine and cosine
//! - [`projection`] - iterative perspective collapse from N dimensions to 3
//! - [`MathError`] - error type shared by all of the above

mod error;
mod plane;
pub mod projection;
pub mod vecn;

pub use error::MathError;
pub use plane::{AxisPair, PlaneRotation};
pub use projection::{project_all, project_to_3d};
pub use vecn::{MatN, Vec3};
