//! A transition request describes one animation from a pose to another.

use std::fmt;
use std::time::Duration;

use super::strategies::TransitionStrategy;
use crate::glyph::DigitAngles;

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// Receives every intermediate pose, in order.
pub type FrameSink = Box<dyn FnMut(&DigitAngles)>;

/// Called once when a transition reaches `t = 1` without being cancelled.
pub type CompletionHook = Box<dyn FnOnce()>;

/// Everything needed to start a transition.
///
/// Built with [`new()`](Self::new) and the
/// [`on_frame()`](Self::on_frame) / [`on_complete()`](Self::on_complete)
/// builders; both callbacks default to no-ops.
pub struct TransitionRequest {
    /// Starting pose.
    pub from: DigitAngles,
    /// Final pose.
    pub to: DigitAngles,
    /// Interpolation algorithm.
    pub strategy: TransitionStrategy,
    /// Wall-clock length. Zero completes on the first frame.
    pub duration: Duration,
    /// Per-frame pose sink.
    pub on_frame: FrameSink,
    /// Completion hook.
    pub on_complete: CompletionHook,
}

impl TransitionRequest {
    /// Request with no-op callbacks.
    #[must_use]
    pub fn new(
        from: DigitAngles,
        to: DigitAngles,
        strategy: TransitionStrategy,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            strategy,
            duration,
            on_frame: Box::new(|_| {}),
            on_complete: Box::new(|| {}),
        }
    }

    /// Set the per-frame pose sink.
    #[must_use]
    pub fn on_frame(mut self, sink: impl FnMut(&DigitAngles) + 'static) -> Self {
        self.on_frame = Box::new(sink);
        self
    }

    /// Set the completion hook.
    #[must_use]
    pub fn on_complete(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_complete = Box::new(hook);
        self
    }
}

impl fmt::Debug for TransitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRequest")
            .field("strategy", &self.strategy)
            .field("duration", &self.duration)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}
