//! Application systems
//!
//! Modular systems kept out of main.rs for testability.

mod animation;

pub use animation::{AnimationSystem, FrameResult};
