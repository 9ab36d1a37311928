//! Digit animator: holds one digit's displayed pose and drives transitions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::runner::{run_transition, TransitionHandle};
use super::scheduler::SharedScheduler;
use super::strategies::TransitionStrategy;
use super::transition::TransitionRequest;
use crate::glyph::DigitAngles;

/// Mutable part of a digit animator, shared with its transition callbacks.
struct Slot {
    /// What is on screen right now.
    angles: DigitAngles,
    /// Pose the current (or last) transition ends at.
    target: DigitAngles,
    animating: bool,
    /// At most one in-flight transition.
    transition: Option<TransitionHandle>,
}

/// Owns the displayed pose of one digit position.
///
/// Starting a new transition preempts the in-flight one; its frames and
/// completion never reach this animator again. Each transition starts from
/// whatever pose is currently displayed, so retargeting mid-flight is
/// seamless.
pub struct DigitAnimator {
    slot: Rc<RefCell<Slot>>,
    scheduler: SharedScheduler,
}

impl DigitAnimator {
    /// Animator showing `initial`, idle.
    pub fn new(scheduler: SharedScheduler, initial: DigitAngles) -> Self {
        let initial = initial.normalized();
        Self {
            slot: Rc::new(RefCell::new(Slot {
                angles: initial,
                target: initial,
                animating: false,
                transition: None,
            })),
            scheduler,
        }
    }

    /// Currently displayed pose.
    pub fn angles(&self) -> DigitAngles {
        self.slot.borrow().angles
    }

    /// Pose the latest transition is heading to (or the set pose).
    pub fn target(&self) -> DigitAngles {
        self.slot.borrow().target
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.slot.borrow().animating
    }

    /// Show `angles` immediately, cancelling any in-flight transition.
    pub fn set_angles(&self, angles: DigitAngles) {
        let angles = angles.normalized();
        let previous = {
            let mut slot = self.slot.borrow_mut();
            slot.angles = angles;
            slot.target = angles;
            slot.animating = false;
            slot.transition.take()
        };
        if let Some(transition) = previous {
            transition.cancel();
        }
    }

    /// Animate from the displayed pose to `target`.
    ///
    /// Any in-flight transition is cancelled first. When this one completes
    /// the displayed pose is snapped to `target` wrapped into `[0, 360)`.
    pub fn animate_to(
        &self,
        target: DigitAngles,
        strategy: TransitionStrategy,
        duration: Duration,
    ) {
        let target = target.normalized();
        let (from, previous) = {
            let mut slot = self.slot.borrow_mut();
            slot.animating = true;
            slot.target = target;
            (slot.angles, slot.transition.take())
        };
        if let Some(transition) = previous {
            log::trace!("preempting {} transition", transition.strategy());
            transition.cancel();
        }

        let frame_slot = Rc::downgrade(&self.slot);
        let done_slot = Rc::downgrade(&self.slot);
        let request = TransitionRequest::new(from, target, strategy, duration)
            .on_frame(move |pose| {
                if let Some(slot) = frame_slot.upgrade() {
                    slot.borrow_mut().angles = *pose;
                }
            })
            .on_complete(move || {
                if let Some(slot) = done_slot.upgrade() {
                    let mut slot = slot.borrow_mut();
                    slot.angles = target;
                    slot.animating = false;
                    slot.transition = None;
                }
            });

        let handle = run_transition(&self.scheduler, request);
        self.slot.borrow_mut().transition = Some(handle);
    }

    /// Stop the in-flight transition, leaving the displayed pose where it is.
    pub fn cancel(&self) {
        let previous = {
            let mut slot = self.slot.borrow_mut();
            slot.animating = false;
            slot.transition.take()
        };
        if let Some(transition) = previous {
            transition.cancel();
        }
    }
}

impl Drop for DigitAnimator {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for DigitAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("DigitAnimator")
            .field("angles", &slot.angles)
            .field("target", &slot.target)
            .field("animating", &slot.animating)
            .finish_non_exhaustive()
    }
}
