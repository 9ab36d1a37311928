//! Frame-driven execution of a single transition.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use web_time::Instant;

use super::scheduler::{FrameHandle, FrameScheduler, SharedScheduler};
use super::strategies::TransitionStrategy;
use super::transition::{CompletionHook, FrameSink, TransitionRequest};
use crate::glyph::DigitAngles;

/// Raw linear progress for `elapsed` out of `duration`, capped at 1.
///
/// A zero duration is already complete.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Shared state of one running transition.
struct Run {
    from: DigitAngles,
    to: DigitAngles,
    strategy: TransitionStrategy,
    duration: Duration,
    /// Timestamp of the first frame; progress is measured from here.
    start: Cell<Option<Instant>>,
    /// Completed or cancelled. Once set, no callback fires again.
    finished: Cell<bool>,
    cancelled: Cell<bool>,
    frames: Cell<u32>,
    pending: Cell<Option<FrameHandle>>,
    on_frame: RefCell<FrameSink>,
    on_complete: Cell<Option<CompletionHook>>,
}

/// Start a transition on `scheduler` and return the handle that cancels it.
///
/// Nothing runs synchronously: the first pose is delivered on the next frame,
/// and that frame's timestamp becomes the start time. Every later frame
/// samples the strategy at `min(elapsed / duration, 1)` and hands the pose to
/// `on_frame`. The frame at which progress reaches 1 is the last one;
/// `on_complete` then fires exactly once.
pub fn run_transition(
    scheduler: &SharedScheduler,
    request: TransitionRequest,
) -> TransitionHandle {
    let TransitionRequest {
        from,
        to,
        strategy,
        duration,
        on_frame,
        on_complete,
    } = request;

    log::debug!("transition start: {strategy} over {duration:?}");

    let run = Rc::new(Run {
        from,
        to,
        strategy,
        duration,
        start: Cell::new(None),
        finished: Cell::new(false),
        cancelled: Cell::new(false),
        frames: Cell::new(0),
        pending: Cell::new(None),
        on_frame: RefCell::new(on_frame),
        on_complete: Cell::new(Some(on_complete)),
    });
    let scheduler = Rc::downgrade(scheduler);
    schedule_tick(&scheduler, &run);

    TransitionHandle { run, scheduler }
}

fn schedule_tick(scheduler: &Weak<dyn FrameScheduler>, run: &Rc<Run>) {
    let Some(host) = scheduler.upgrade() else {
        log::warn!("frame scheduler dropped; {} transition abandoned", run.strategy);
        run.finished.set(true);
        return;
    };
    let weak = Weak::clone(scheduler);
    let state = Rc::clone(run);
    let handle = host.schedule_frame(Box::new(move |now| tick(&weak, &state, now)));
    run.pending.set(Some(handle));
}

fn tick(scheduler: &Weak<dyn FrameScheduler>, run: &Rc<Run>, now: Instant) {
    run.pending.set(None);
    if run.finished.get() {
        return;
    }

    let start = match run.start.get() {
        Some(start) => start,
        None => {
            run.start.set(Some(now));
            now
        }
    };
    let t = progress(now.saturating_duration_since(start), run.duration);
    let pose = run.strategy.apply(&run.from, &run.to, t);
    run.frames.set(run.frames.get() + 1);
    log::trace!("transition frame {} t={t:.3}", run.frames.get());

    let mut sink = run.on_frame.borrow_mut();
    (*sink)(&pose);
    drop(sink);

    // The sink may have cancelled us
    if run.finished.get() {
        return;
    }
    if t < 1.0 {
        schedule_tick(scheduler, run);
        return;
    }

    run.finished.set(true);
    log::debug!(
        "transition complete: {} after {} frames",
        run.strategy,
        run.frames.get()
    );
    if let Some(hook) = run.on_complete.take() {
        hook();
    }
}

/// Cancellation handle for a running transition.
///
/// Dropping the handle does not stop the transition; call
/// [`cancel()`](Self::cancel).
pub struct TransitionHandle {
    run: Rc<Run>,
    scheduler: Weak<dyn FrameScheduler>,
}

impl TransitionHandle {
    /// Stop the transition. No further `on_frame` or `on_complete` calls
    /// happen after this returns. Idempotent, and a no-op once complete.
    pub fn cancel(&self) {
        if self.run.finished.replace(true) {
            return;
        }
        self.run.cancelled.set(true);
        if let Some(handle) = self.run.pending.take() {
            if let Some(host) = self.scheduler.upgrade() {
                host.cancel_frame(handle);
            }
        }
        drop(self.run.on_complete.take());
        log::debug!(
            "transition cancelled: {} after {} frames",
            self.run.strategy,
            self.run.frames.get()
        );
    }

    /// Whether the transition completed or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.run.finished.get()
    }

    /// Whether the transition was cancelled before completing.
    pub fn is_cancelled(&self) -> bool {
        self.run.cancelled.get()
    }

    /// Frames delivered so far.
    pub fn frames(&self) -> u32 {
        self.run.frames.get()
    }

    /// Strategy this transition samples.
    pub fn strategy(&self) -> TransitionStrategy {
        self.run.strategy
    }
}

impl fmt::Debug for TransitionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionHandle")
            .field("strategy", &self.run.strategy)
            .field("duration", &self.run.duration)
            .field("frames", &self.run.frames.get())
            .field("finished", &self.run.finished.get())
            .field("cancelled", &self.run.cancelled.get())
            .finish()
    }
}
