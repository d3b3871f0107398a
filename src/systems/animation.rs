//! Animation system
//!
//! Drives a [`Session`] from wall-clock time:
//! - Delta time calculation
//! - Schedule rotation and reprojection
//! - Frame statistics for the host

use std::time::Instant;
use ndrender_core::{Session, ShapeError};

/// Result of one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameResult {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Triangles in the frame's index buffer
    pub triangle_count: usize,
    /// Bytes the host would upload (positions, secondary attributes, indices)
    pub upload_bytes: usize,
}

/// Advances a session once per frame using the real time between frames
pub struct AnimationSystem {
    last_frame: Instant,
}

impl AnimationSystem {
    /// Create a new animation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Restart the frame clock, e.g. after a pause
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Run one animation frame
    ///
    /// Rotation is proportional to elapsed time, so no cap is applied to the
    /// delta: a long stall turns the shape further instead of slowing it.
    pub fn tick(&mut self, session: &mut Session) -> Result<FrameResult, ShapeError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        Self::step(session, dt)
    }

    /// Advance `session` by an explicit `dt`
    pub fn step(session: &mut Session, dt: f32) -> Result<FrameResult, ShapeError> {
        let buffers = session.advance(dt)?;
        Ok(FrameResult {
            dt,
            triangle_count: buffers.triangle_count(),
            upload_bytes: buffers.position_bytes().len()
                + buffers.secondary_bytes().len()
                + buffers.index_bytes().len(),
        })
    }
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndrender_core::{RotationSchedule, ShapeTemplate};

    fn tesseract() -> Session {
        let shape = ShapeTemplate::hypercube(4).create_shape(3.0).unwrap();
        Session::new(shape, RotationSchedule::default())
    }

    #[test]
    fn test_tick_measures_wall_clock() {
        let mut system = AnimationSystem::new();
        let mut session = tesseract();
        std::thread::sleep(std::time::Duration::from_millis(20));

        let result = system.tick(&mut session).unwrap();
        assert!(result.dt >= 0.02);
        assert_eq!(result.triangle_count, 48);
        assert_eq!(session.frames(), 1);
    }

    #[test]
    fn test_step_reports_upload_size() {
        let mut session = tesseract();
        let result = AnimationSystem::step(&mut session, 0.016).unwrap();
        // 96 vertices × 3 floats × 2 buffers, plus 144 u32 indices
        assert_eq!(result.upload_bytes, 96 * 3 * 4 * 2 + 144 * 4);
    }

    #[test]
    fn test_step_rejects_negative_dt() {
        let mut session = tesseract();
        assert_eq!(
            AnimationSystem::step(&mut session, -1.0),
            Err(ShapeError::InvalidElapsedTime(-1.0))
        );
    }

    #[test]
    fn test_default_construction() {
        let system = AnimationSystem::default();
        assert!(system.last_frame.elapsed().as_millis() < 100);
    }
}
