//! Crate-level error types.

use std::fmt;

/// Errors produced by the clockart crate.
#[derive(Debug)]
pub enum ClockArtError {
    /// A digit pose did not contain exactly six clocks.
    ClockCount {
        /// Number of clocks a digit grid requires.
        expected: usize,
        /// Number of clocks that were supplied.
        actual: usize,
    },
    /// A hand angle was NaN or infinite.
    NonFiniteAngle {
        /// Grid label (`a`..`f`) of the offending clock.
        clock: char,
        /// The rejected value.
        value: f32,
    },
    /// No glyph exists for this character.
    UnknownGlyph(char),
    /// A time of day outside `00:00:00..=23:59:59`.
    InvalidTime {
        /// Requested hours.
        hours: u32,
        /// Requested minutes.
        minutes: u32,
        /// Requested seconds.
        seconds: u32,
    },
    /// Text that does not look like `HH:MM` or `HH:MM:SS`.
    TimeParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing failure.
    OptionsParse(String),
}

impl fmt::Display for ClockArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClockCount { expected, actual } => {
                write!(f, "digit pose needs {expected} clocks, got {actual}")
            }
            Self::NonFiniteAngle { clock, value } => {
                write!(f, "clock '{clock}' has a non-finite hand angle ({value})")
            }
            Self::UnknownGlyph(c) => write!(f, "no digit glyph for {c:?}"),
            Self::InvalidTime {
                hours,
                minutes,
                seconds,
            } => write!(
                f,
                "invalid time of day {hours:02}:{minutes:02}:{seconds:02}"
            ),
            Self::TimeParse(text) => {
                write!(f, "expected HH:MM or HH:MM:SS, got {text:?}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ClockArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClockArtError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_count_message_names_both_sizes() {
        let err = ClockArtError::ClockCount {
            expected: 6,
            actual: 4,
        };
        assert_eq!(err.to_string(), "digit pose needs 6 clocks, got 4");
    }

    #[test]
    fn test_invalid_time_is_zero_padded() {
        let err = ClockArtError::InvalidTime {
            hours: 24,
            minutes: 5,
            seconds: 0,
        };
        assert_eq!(err.to_string(), "invalid time of day 24:05:00");
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error;

        let err = ClockArtError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(ClockArtError::UnknownGlyph('x').source().is_none());
    }
}
