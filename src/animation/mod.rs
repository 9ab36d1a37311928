//! Digit transition animation.
//!
//! - [`strategies`]: pure interpolation algorithms between two poses
//! - [`run_transition`]: drives one transition off host frame callbacks
//! - [`DigitAnimator`]: holds a digit's displayed pose and preempts
//!   in-flight transitions when retargeted
//!
//! Everything here is single-threaded. The host supplies frames through a
//! [`FrameScheduler`]; [`FrameQueue`] is the in-process implementation.

mod animator;
mod runner;
pub mod scheduler;
pub mod strategies;
pub mod transition;

pub use animator::DigitAnimator;
pub use runner::{progress, run_transition, TransitionHandle};
pub use scheduler::{
    FrameCallback, FrameHandle, FrameQueue, FrameScheduler, SharedScheduler,
};
pub use strategies::TransitionStrategy;
pub use transition::{TransitionRequest, DEFAULT_DURATION};
