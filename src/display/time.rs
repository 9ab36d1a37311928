//! Time of day and the simulated clock that feeds the display.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::ClockArtError;

/// Slowest simulation speed (real time).
pub const MIN_SPEED: u32 = 1;

/// Fastest simulation speed.
pub const MAX_SPEED: u32 = 60;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Wall-clock time of day, second resolution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl ClockTime {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Validated time of day.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, ClockArtError> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(ClockArtError::InvalidTime {
                hours,
                minutes,
                seconds,
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Current local time.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        // chrono reports a leap second as second 59 + extra nanos
        Self {
            hours: now.hour(),
            minutes: now.minute(),
            seconds: now.second().min(59),
        }
    }

    /// Hours, `0..24`.
    pub fn hours(self) -> u32 {
        self.hours
    }

    /// Minutes, `0..60`.
    pub fn minutes(self) -> u32 {
        self.minutes
    }

    /// Seconds, `0..60`.
    pub fn seconds(self) -> u32 {
        self.seconds
    }

    fn seconds_of_day(self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    fn from_seconds_of_day(total: u32) -> Self {
        let total = total % SECONDS_PER_DAY;
        Self {
            hours: total / 3600,
            minutes: total / 60 % 60,
            seconds: total % 60,
        }
    }

    /// One second later, rolling over at midnight.
    #[must_use]
    pub fn tick_forward(self) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + 1)
    }

    /// The four displayed characters `H H M M`.
    pub fn digits(self) -> [char; 4] {
        let digit = |n: u32| char::from_digit(n % 10, 10).unwrap_or('0');
        [
            digit(self.hours / 10),
            digit(self.hours % 10),
            digit(self.minutes / 10),
            digit(self.minutes % 10),
        ]
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for ClockTime {
    type Err = ClockArtError;

    /// Parses `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ClockArtError::TimeParse(s.to_owned());
        let mut fields = [0u32; 3];
        let mut count = 0;
        for part in s.trim().split(':') {
            if count == fields.len()
                || part.is_empty()
                || part.len() > 2
                || !part.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(bad());
            }
            fields[count] = part.parse().map_err(|_| bad())?;
            count += 1;
        }
        if count < 2 {
            return Err(bad());
        }
        Self::new(fields[0], fields[1], fields[2])
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockArtError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A time of day that advances at `speed` simulated seconds per real second.
///
/// Fed real elapsed time through [`advance()`](Self::advance); whole
/// simulated seconds tick the time forward, the remainder carries over.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedClock {
    time: ClockTime,
    speed: u32,
    carry: Duration,
}

impl SimulatedClock {
    /// Clock at `time`. `speed` is clamped to [`MIN_SPEED`]..=[`MAX_SPEED`].
    pub fn new(time: ClockTime, speed: u32) -> Self {
        Self {
            time,
            speed: clamp_speed(speed),
            carry: Duration::ZERO,
        }
    }

    /// Current simulated time.
    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Simulated seconds per real second.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Change the speed, clamped to the supported range.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = clamp_speed(speed);
    }

    /// Jump to `time`, discarding any partial second.
    pub fn set_time(&mut self, time: ClockTime) {
        self.time = time;
        self.carry = Duration::ZERO;
    }

    /// Jump to the current local time.
    pub fn set_now(&mut self) {
        self.set_time(ClockTime::now());
    }

    /// Real time between simulated ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed
    }

    /// Advance by `elapsed` real time; returns how many seconds ticked.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let interval = self.tick_interval();
        self.carry += elapsed;
        let mut ticks = 0;
        while self.carry >= interval {
            self.carry -= interval;
            self.time = self.time.tick_forward();
            ticks += 1;
        }
        ticks
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self::new(ClockTime::MIDNIGHT, MIN_SPEED)
    }
}

fn clamp_speed(speed: u32) -> u32 {
    let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
    if clamped != speed {
        log::debug!("simulation speed {speed} clamped to {clamped}");
    }
    clamped
}
