//! Transition strategies define how hands travel between two digit poses.
//!
//! A strategy is a pure function of `(from, to, t)` where `t` is raw linear
//! progress in `[0, 1]`. Each one applies the cubic ease internally and
//! returns a fresh normalized pose, so the same strategy can be sampled
//! repeatedly at increasing `t` for one transition or once in isolation.
//!
//! The set is closed: [`TransitionStrategy`] names every algorithm and
//! dispatches to its function.

mod shortest_path;
mod staggered;
mod synchronized_sweep;
mod wind_up;

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use shortest_path::shortest_path;
pub use staggered::{row_for_clock, row_progress, staggered, ROW_DURATION, STAGGER};
pub use synchronized_sweep::synchronized_sweep;
pub use wind_up::wind_up;

use crate::glyph::DigitAngles;

/// Named interpolation algorithm for a digit transition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStrategy {
    /// Each hand rotates the short way round (at most half a turn).
    #[default]
    ShortestPath,
    /// All hands rotate clockwise only, finishing together.
    SynchronizedSweep,
    /// Rows `ab`, `cd`, `ef` animate one after another with overlap.
    Staggered,
    /// Clockwise with one extra full revolution.
    WindUp,
}

impl TransitionStrategy {
    /// Every strategy, in menu order.
    pub const ALL: [Self; 4] = [
        Self::ShortestPath,
        Self::SynchronizedSweep,
        Self::Staggered,
        Self::WindUp,
    ];

    /// Sample the strategy at raw progress `t`.
    pub fn apply(self, from: &DigitAngles, to: &DigitAngles, t: f32) -> DigitAngles {
        match self {
            Self::ShortestPath => shortest_path(from, to, t),
            Self::SynchronizedSweep => synchronized_sweep(from, to, t),
            Self::Staggered => staggered(from, to, t),
            Self::WindUp => wind_up(from, to, t),
        }
    }

    /// Stable machine name, as used in option files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::ShortestPath => "shortest_path",
            Self::SynchronizedSweep => "synchronized_sweep",
            Self::Staggered => "staggered",
            Self::WindUp => "wind_up",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ShortestPath => "Shortest Path",
            Self::SynchronizedSweep => "Synchronized Sweep",
            Self::Staggered => "Staggered",
            Self::WindUp => "Wind-Up",
        }
    }
}

impl fmt::Display for TransitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> =
            TransitionStrategy::ALL.iter().map(|s| s.name()).collect();
        write!(
            f,
            "unknown transition strategy '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for TransitionStrategy {
    type Err = UnknownStrategy;

    /// Parses the machine name; dashes are accepted in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{builtin_glyph, ClockAngles, DIGITS};
    use crate::util::angle::shortest_delta;
    use crate::util::easing::ease_in_out_cubic;

    const EPS: f32 = 1e-3;
    // Accumulated over every sampled step, so looser than EPS
    const TRAVEL_EPS: f32 = 0.05;
    const SAMPLES: usize = 240;

    fn glyph(d: char) -> DigitAngles {
        builtin_glyph(d).unwrap()
    }

    fn hands(pose: &DigitAngles) -> Vec<f32> {
        pose.iter().flat_map(|c| [c.hour, c.minute]).collect()
    }

    /// Signed travel of each hand over a densely sampled transition,
    /// accumulated frame to frame.
    fn travel(
        strategy: TransitionStrategy,
        from: &DigitAngles,
        to: &DigitAngles,
    ) -> Vec<Vec<f32>> {
        let frames: Vec<Vec<f32>> = (0..=SAMPLES)
            .map(|i| hands(&strategy.apply(from, to, i as f32 / SAMPLES as f32)))
            .collect();
        let mut steps = vec![Vec::with_capacity(SAMPLES); 12];
        for pair in frames.windows(2) {
            for (hand, (a, b)) in pair[0].iter().zip(&pair[1]).enumerate() {
                steps[hand].push(shortest_delta(*a, *b));
            }
        }
        steps
    }

    fn all_pairs() -> Vec<(DigitAngles, DigitAngles)> {
        let mut pairs = Vec::new();
        for a in DIGITS {
            for b in DIGITS {
                pairs.push((glyph(a), glyph(b)));
            }
        }
        let odd_from = DigitAngles::new(std::array::from_fn(|i| {
            ClockAngles::new(i as f32 * 37.5 + 3.0, 359.0 - i as f32 * 61.0)
        }));
        pairs.push((odd_from, glyph('8')));
        pairs.push((glyph('8'), odd_from));
        pairs
    }

    #[test]
    fn test_endpoints_match_from_and_to() {
        for strategy in TransitionStrategy::ALL {
            for (from, to) in all_pairs() {
                let start = strategy.apply(&from, &to, 0.0);
                let end = strategy.apply(&from, &to, 1.0);
                assert!(start.approx_eq(&from, EPS), "{strategy} at t=0");
                assert!(end.approx_eq(&to, EPS), "{strategy} at t=1");
            }
        }
    }

    #[test]
    fn test_output_is_always_normalized() {
        for strategy in TransitionStrategy::ALL {
            for (from, to) in all_pairs() {
                for i in 0..=20 {
                    let frame = strategy.apply(&from, &to, i as f32 / 20.0);
                    for h in hands(&frame) {
                        assert!((0.0..360.0).contains(&h), "{strategy}: {h}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_inputs_are_not_mutated_and_results_repeat() {
        let from = glyph('3');
        let to = glyph('4');
        let (from_copy, to_copy) = (from, to);
        for strategy in TransitionStrategy::ALL {
            let a = strategy.apply(&from, &to, 0.37);
            let b = strategy.apply(&from, &to, 0.37);
            assert_eq!(a, b);
        }
        assert_eq!(from, from_copy);
        assert_eq!(to, to_copy);
    }

    #[test]
    fn test_shortest_path_never_exceeds_half_turn() {
        for (from, to) in all_pairs() {
            for steps in travel(TransitionStrategy::ShortestPath, &from, &to) {
                let total: f32 = steps.iter().sum();
                assert!(total.abs() <= 180.0 + TRAVEL_EPS, "travel {total}");
            }
        }
    }

    #[test]
    fn test_synchronized_sweep_is_clockwise_and_under_a_turn() {
        for (from, to) in all_pairs() {
            for steps in travel(TransitionStrategy::SynchronizedSweep, &from, &to) {
                assert!(steps.iter().all(|s| *s >= -EPS), "moved backwards");
                let total: f32 = steps.iter().sum();
                assert!((-TRAVEL_EPS..360.0).contains(&total), "travel {total}");
            }
        }
    }

    #[test]
    fn test_synchronized_sweep_leaves_settled_hands_alone() {
        let from = glyph('8');
        let to = glyph('9');
        for i in 0..=20 {
            let frame = TransitionStrategy::SynchronizedSweep.apply(
                &from,
                &to,
                i as f32 / 20.0,
            );
            // 8 and 9 share clocks a..d and f
            for idx in [0, 1, 2, 3, 5] {
                assert_eq!(frame.clocks()[idx], from.clocks()[idx]);
            }
        }
    }

    #[test]
    fn test_wind_up_travels_at_least_one_turn() {
        for (from, to) in all_pairs() {
            for steps in travel(TransitionStrategy::WindUp, &from, &to) {
                assert!(steps.iter().all(|s| *s >= -EPS), "moved backwards");
                let total: f32 = steps.iter().sum();
                assert!(total >= 360.0 - TRAVEL_EPS, "travel {total}");
                assert!(total < 720.0, "travel {total}");
            }
        }
    }

    #[test]
    fn test_wind_up_same_pose_is_exactly_one_turn() {
        let pose = glyph('5');
        for steps in travel(TransitionStrategy::WindUp, &pose, &pose) {
            let total: f32 = steps.iter().sum();
            assert!((total - 360.0).abs() < TRAVEL_EPS, "travel {total}");
        }
    }

    #[test]
    fn test_staggered_rows_finish_in_order() {
        let from = glyph('1');
        let to = glyph('2');
        let strategy = TransitionStrategy::Staggered;

        // First t at which every clock of a row sits on its target
        let settled_at = |row: usize| -> f32 {
            (0..=SAMPLES)
                .map(|i| i as f32 / SAMPLES as f32)
                .find(|&t| {
                    let frame = strategy.apply(&from, &to, t);
                    (0..6).filter(|&i| row_for_clock(i) == row).all(|i| {
                        let got = frame.clocks()[i];
                        let want = to.clocks()[i];
                        shortest_delta(got.hour, want.hour).abs() < EPS
                            && shortest_delta(got.minute, want.minute).abs() < EPS
                    })
                })
                .unwrap_or(f32::INFINITY)
        };

        let (r0, r1, r2) = (settled_at(0), settled_at(1), settled_at(2));
        assert!(r0 <= r1 && r1 <= r2, "{r0} {r1} {r2}");
        assert!(r0 <= 0.5 + EPS);
        assert!(r2 <= 1.0);
    }

    #[test]
    fn test_staggered_later_rows_wait_for_their_window() {
        let from = glyph('0');
        let to = glyph('7');
        let frame = TransitionStrategy::Staggered.apply(&from, &to, 0.25);
        // Row 2 (clocks e, f) has not started yet
        assert_eq!(frame.clocks()[4], from.clocks()[4]);
        assert_eq!(frame.clocks()[5], from.clocks()[5]);
        // Row 0 is half-way through its window: a's minute hand 180 -> 90
        let expected = ease_in_out_cubic(0.5);
        let a_from = from.clocks()[0].minute;
        let a_to = to.clocks()[0].minute;
        let want = a_from + shortest_delta(a_from, a_to) * expected;
        assert!((frame.clocks()[0].minute - want).abs() < EPS);
        assert!((want - 135.0).abs() < EPS);
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for strategy in TransitionStrategy::ALL {
            assert_eq!(strategy.name().parse::<TransitionStrategy>(), Ok(strategy));
        }
        assert_eq!(
            "wind-up".parse::<TransitionStrategy>(),
            Ok(TransitionStrategy::WindUp)
        );
        let err = "zigzag".parse::<TransitionStrategy>().unwrap_err();
        assert!(err.to_string().contains("shortest_path"));
    }

    #[test]
    fn test_serde_uses_machine_names() {
        let json = serde_json::to_string(&TransitionStrategy::SynchronizedSweep).unwrap();
        assert_eq!(json, "\"synchronized_sweep\"");
        assert_eq!(TransitionStrategy::default(), TransitionStrategy::ShortestPath);
        assert_eq!(TransitionStrategy::WindUp.label(), "Wind-Up");
    }
}
