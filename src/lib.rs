//! # Arpeggio
//!
//! An interactive trainer for chord spelling. The theory — pitch
//! classes, enharmonic spellings, intervals, qualities, and the chord
//! builder — lives in the `arpeggio-core` crate; this crate owns the
//! terminal session: quiz selection, the prompt loop, answer matching,
//! and feedback.
//!
//! ## Modules
//!
//! - `quiz`: the session loop and its two round types (spelling a
//!   named chord tone by tone, and identifying the quality of a
//!   displayed chord), plus the rustyline-backed prompt with quit
//!   handling.

pub mod quiz;

// Re-export commonly used types for convenience
pub use crate::quiz::{run, QuizKind, RoundOutcome};
