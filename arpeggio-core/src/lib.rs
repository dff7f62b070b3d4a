//! # Arpeggio Core
//!
//! The theory engine behind the arpeggio quiz: given a root pitch and
//! a chord quality, derive the theoretically correct spelling of every
//! chord tone. Among the enharmonic names a pitch class can carry, the
//! correct one is the name whose letter sits the interval's generic
//! size away from the root's letter — the major third above Cb is Eb,
//! never D#, because a third spans three letters.
//!
//! The crate is pure: no I/O, no terminal dependencies, no shared
//! mutable state. All tables (pitch spellings, intervals, qualities,
//! aliases) are process-wide constants, safe for unsynchronized
//! concurrent reads. Randomness only enters where a caller asks for a
//! random root or quality, and is injected as a [`rand::Rng`] so tests
//! can seed it.
//!
//! ## Modules
//!
//! - `types`: pitch classes and their enharmonic spellings, intervals
//!   with semitone and generic (letter) sizes, the quality registry
//!   with its alias table, and chord construction.
//! - `error`: the matchable error kinds the engine raises.
//!
//! ## Example
//!
//! ```
//! use arpeggio_core::{Chord, Note};
//!
//! let root: Note = "Cb".parse()?;
//! let chord = Chord::build(root, "major")?;
//! assert_eq!(chord.notes_string(), "Cb, Eb, Gb");
//! # Ok::<(), arpeggio_core::TheoryError>(())
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TheoryError};
pub use types::{
    is_valid_alias, quality_names, random_quality, resolve_alias, Chord, Interval, Note,
    PitchClass,
};
