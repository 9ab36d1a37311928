//! Host frame scheduling.
//!
//! The engine never owns a clock or a loop. It asks the host for "call me on
//! the next display refresh" through [`FrameScheduler`] and is resumed with
//! the refresh timestamp. Everything runs on one thread; suspension between
//! frames is just the host returning to its own loop.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use web_time::Instant;

/// Work to run on the next frame, receiving the frame timestamp.
pub type FrameCallback = Box<dyn FnOnce(Instant)>;

/// Identifies one scheduled frame callback so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// "Request next frame" capability of a display host.
pub trait FrameScheduler {
    /// Run `callback` once, on the next frame.
    fn schedule_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Drop a scheduled callback before it runs. Unknown or already-run
    /// handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Type alias for shared scheduler references.
pub type SharedScheduler = Rc<dyn FrameScheduler>;

/// In-process frame queue pumped by a host loop (or a test).
///
/// Callbacks scheduled while a frame is running land in the *next* frame,
/// the way a display refresh callback behaves. The host decides what "now"
/// is for each frame, so irregular or simulated frame times are fine.
#[derive(Default)]
pub struct FrameQueue {
    next_id: Cell<u64>,
    pending: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    running: RefCell<VecDeque<(FrameHandle, FrameCallback)>>,
}

impl FrameQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Whether nothing is waiting for a frame.
    pub fn is_idle(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Deliver one frame at `now`, running every callback that was pending
    /// when the call began. Returns how many ran.
    pub fn run_frame(&self, now: Instant) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        self.running.borrow_mut().extend(batch);

        let mut ran = 0;
        loop {
            let next = self.running.borrow_mut().pop_front();
            let Some((_, callback)) = next else {
                break;
            };
            callback(now);
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule_frame(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        self.pending.borrow_mut().push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().retain(|(h, _)| *h != handle);
        // A callback earlier in the running batch may cancel a later one
        self.running.borrow_mut().retain(|(h, _)| *h != handle);
    }
}

impl fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .field("running", &self.running.borrow().len())
            .finish_non_exhaustive()
    }
}
