//! Shared utilities for the animation engine.
//!
//! Angle math, the easing curve, and frame pacing for host loops.

pub mod angle;
pub mod easing;
pub mod frame_timing;
