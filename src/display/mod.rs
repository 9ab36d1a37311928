//! Four-digit `HH:MM` clock built from digit animators.

pub mod time;

use std::rc::Rc;
use std::time::Duration;

pub use time::{ClockTime, SimulatedClock, MAX_SPEED, MIN_SPEED};

use crate::animation::{DigitAnimator, SharedScheduler, TransitionStrategy};
use crate::error::ClockArtError;
use crate::glyph::{DigitAngles, DigitGlyphTable};

/// Digit positions on the display: two for hours, two for minutes.
pub const SLOT_COUNT: usize = 4;

/// A clock face of four digit slots.
///
/// Showing a new time starts a transition only in the slots whose character
/// changed; the rest keep whatever they are doing.
#[derive(Debug)]
pub struct ClockDisplay {
    slots: [DigitAnimator; SLOT_COUNT],
    digits: [char; SLOT_COUNT],
    glyphs: DigitGlyphTable,
    strategy: TransitionStrategy,
    duration: Duration,
}

impl ClockDisplay {
    /// Display showing `time` at rest.
    pub fn new(
        scheduler: &SharedScheduler,
        glyphs: DigitGlyphTable,
        time: ClockTime,
        strategy: TransitionStrategy,
        duration: Duration,
    ) -> Result<Self, ClockArtError> {
        let digits = time.digits();
        let mut poses = [DigitAngles::default(); SLOT_COUNT];
        for (pose, digit) in poses.iter_mut().zip(digits) {
            *pose = glyphs.get(digit)?;
        }
        let slots = poses.map(|pose| DigitAnimator::new(Rc::clone(scheduler), pose));
        log::debug!("clock display at {time} using {strategy}");

        Ok(Self {
            slots,
            digits,
            glyphs,
            strategy,
            duration,
        })
    }

    /// Show `time`, animating every slot whose digit changed.
    ///
    /// Returns the number of slots that started a transition.
    pub fn show_time(&mut self, time: ClockTime) -> Result<usize, ClockArtError> {
        let digits = time.digits();
        let mut started = 0;
        for (i, digit) in digits.into_iter().enumerate() {
            if digit == self.digits[i] {
                continue;
            }
            let target = self.glyphs.get(digit)?;
            self.slots[i].animate_to(target, self.strategy, self.duration);
            self.digits[i] = digit;
            started += 1;
        }
        if started > 0 {
            log::debug!("{time}: {started} digit(s) changed");
        }
        Ok(started)
    }

    /// Swap the glyph table, animating slots whose pose changed.
    pub fn set_glyphs(&mut self, glyphs: DigitGlyphTable) -> Result<(), ClockArtError> {
        let mut targets = [DigitAngles::default(); SLOT_COUNT];
        for (target, digit) in targets.iter_mut().zip(self.digits) {
            *target = glyphs.get(digit)?;
        }
        for (slot, target) in self.slots.iter().zip(targets) {
            if slot.target() != target {
                slot.animate_to(target, self.strategy, self.duration);
            }
        }
        self.glyphs = glyphs;
        Ok(())
    }

    /// Strategy used for new transitions.
    pub fn strategy(&self) -> TransitionStrategy {
        self.strategy
    }

    /// Change the strategy for transitions started from now on.
    pub fn set_strategy(&mut self, strategy: TransitionStrategy) {
        self.strategy = strategy;
    }

    /// Length of new transitions.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the length of transitions started from now on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Characters currently targeted by each slot.
    pub fn digits(&self) -> [char; SLOT_COUNT] {
        self.digits
    }

    /// Displayed pose of every slot.
    pub fn snapshot(&self) -> [DigitAngles; SLOT_COUNT] {
        std::array::from_fn(|i| self.slots[i].angles())
    }

    /// The animator for slot `index`.
    pub fn slot(&self, index: usize) -> Option<&DigitAnimator> {
        self.slots.get(index)
    }

    /// Whether any slot is mid-transition.
    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(DigitAnimator::is_animating)
    }

    /// Stop every slot where it stands.
    pub fn cancel_all(&self) {
        for slot in &self.slots {
            slot.cancel();
        }
    }
}
