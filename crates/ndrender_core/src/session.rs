//! A shape animated by a rotation schedule
//!
//! The host owns one session per displayed shape and calls [`Session::advance`]
//! once per frame with the seconds elapsed since the previous frame.

use crate::{FrameBuffers, RotationSchedule, Shape, ShapeError};

/// A shape plus the schedule that spins it
#[derive(Debug)]
pub struct Session {
    shape: Shape,
    schedule: RotationSchedule,
    elapsed: f64,
    frames: u64,
}

impl Session {
    /// Create a session from an already projected shape
    pub fn new(shape: Shape, schedule: RotationSchedule) -> Self {
        log::debug!(
            "Session for {}D {}: {} of {} rotation planes apply",
            shape.dimensions(),
            shape.name(),
            schedule.for_dimensions(shape.dimensions()).count(),
            schedule.entries().len()
        );
        Self { shape, schedule, elapsed: 0.0, frames: 0 }
    }

    /// Rotate by `dt` seconds of the schedule and produce the next frame
    ///
    /// A negative or non-finite `dt` is rejected before anything is rotated.
    pub fn advance(&mut self, dt: f32) -> Result<FrameBuffers<'_>, ShapeError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(ShapeError::InvalidElapsedTime(dt));
        }

        self.schedule.apply(&mut self.shape, dt)?;
        self.elapsed += f64::from(dt);
        self.frames += 1;
        log::trace!("Frame {} at {:.3}s", self.frames, self.elapsed);

        self.shape.update()
    }

    /// The shape being animated
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Mutable access to the shape, e.g. to toggle depth sorting
    #[inline]
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// The schedule applied on every advance
    #[inline]
    pub fn schedule(&self) -> &RotationSchedule {
        &self.schedule
    }

    /// Total seconds advanced
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of successful calls to [`advance`](Self::advance)
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The buffers of the most recent frame
    pub fn buffers(&self) -> FrameBuffers<'_> {
        self.shape.buffers()
    }
}
