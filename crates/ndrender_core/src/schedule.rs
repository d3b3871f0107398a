//! Per-frame rotation schedule
//!
//! The host animates a shape by rotating it in a fixed list of planes every
//! frame, each at its own angular velocity. Planes that need axes the shape
//! does not have are skipped, so one schedule serves every dimensionality.

use serde::{Deserialize, Serialize};

use ndrender_math::AxisPair;

use crate::{Shape, ShapeError};

/// One plane of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationEntry {
    /// Plane of rotation, e.g. `[0, 2]`
    pub plane: AxisPair,
    /// Radians per second
    pub angular_velocity: f32,
}

impl RotationEntry {
    /// Create a schedule entry
    pub fn new(a: usize, b: usize, angular_velocity: f32) -> Self {
        Self { plane: AxisPair::new(a, b), angular_velocity }
    }
}

/// Ordered list of plane rotations applied every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationSchedule {
    entries: Vec<RotationEntry>,
}

impl RotationSchedule {
    /// Create a schedule from entries, applied in order
    pub fn new(entries: Vec<RotationEntry>) -> Self {
        Self { entries }
    }

    /// A schedule that never rotates
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry
    pub fn with_entry(mut self, entry: RotationEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// All entries
    pub fn entries(&self) -> &[RotationEntry] {
        &self.entries
    }

    /// Entries whose plane exists in `dimensions`-space
    pub fn for_dimensions(&self, dimensions: usize) -> impl Iterator<Item = &RotationEntry> + '_ {
        self.entries.iter().filter(move |e| e.plane.fits(dimensions))
    }

    /// Rotate `shape` by `elapsed` seconds' worth of every applicable entry
    ///
    /// Every angle is checked first, so a non-finite one leaves the shape
    /// untouched.
    pub fn apply(&self, shape: &mut Shape, elapsed: f32) -> Result<(), ShapeError> {
        let dimensions = shape.dimensions();
        if let Some(entry) = self
            .for_dimensions(dimensions)
            .find(|e| !(elapsed * e.angular_velocity).is_finite())
        {
            return Err(ShapeError::InvalidAngle(elapsed * entry.angular_velocity));
        }
        for entry in self.for_dimensions(dimensions) {
            shape.rotate(elapsed * entry.angular_velocity, entry.plane)?;
        }
        Ok(())
    }
}

impl Default for RotationSchedule {
    /// XZ always, then ZW and WY from 4D, then XV and VY from 5D, at 1 rad/s
    fn default() -> Self {
        Self::new(vec![
            RotationEntry::new(0, 2, 1.0),
            RotationEntry::new(2, 3, 1.0),
            RotationEntry::new(3, 1, 1.0),
            RotationEntry::new(0, 4, 1.0),
            RotationEntry::new(4, 1, 1.0),
        ])
    }
}
