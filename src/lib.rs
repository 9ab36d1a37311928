// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Clock-art digit transitions.
//!
//! Each digit of a clock-art display is drawn by six small analog clocks in a
//! 2x3 grid, their hands tracing the strokes of the digit. This crate animates
//! every hand from one digit pose to another using a choice of interpolation
//! strategies, driven by a host-supplied frame callback.
//!
//! # Key entry points
//!
//! - [`glyph::DigitAngles`] - six-clock pose of one digit
//! - [`glyph::DigitGlyphTable`] - digit-to-pose lookup with custom designs
//! - [`animation::TransitionStrategy`] - the interpolation algorithms
//! - [`animation::run_transition`] - frame-driven transition engine
//! - [`animation::DigitAnimator`] - per-digit state holder with preemption
//! - [`display::ClockDisplay`] - four-digit `HH:MM` face
//! - [`options::Options`] - runtime configuration loaded from TOML
//!
//! # Architecture
//!
//! Strategies are pure functions of `(from, to, t)`. The engine samples a
//! strategy once per host frame at `t = elapsed / duration`, delivers each
//! pose, and signals completion once. Hosts provide frames through
//! [`animation::FrameScheduler`]; [`animation::FrameQueue`] is an in-process
//! implementation pumped by the host loop.

pub mod animation;
pub mod display;
pub mod error;
pub mod glyph;
pub mod options;
pub mod util;

pub use error::ClockArtError;
