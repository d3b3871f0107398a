//! ndrender application library
//!
//! Configuration loading and the frame-driving systems used by the
//! `ndrender` binary. The geometry kernel lives in `ndrender_core`.

pub mod config;
pub mod systems;
