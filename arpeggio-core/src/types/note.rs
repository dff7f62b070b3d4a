use crate::error::{Result, TheoryError};
use crate::types::pitch::PitchClass;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A pitch class together with one chosen enharmonic spelling.
///
/// The spelling is held as an index into the class's table row, so a
/// `Note` is always a name that actually exists for its class. The
/// note's letter is the leading character of that spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pitch_class: PitchClass,
    spelling_index: usize,
}

impl Note {
    /// Create a note from a pitch class and a spelling index into that
    /// class's table row.
    pub fn new(pitch_class: PitchClass, spelling_index: usize) -> Result<Self> {
        if spelling_index >= pitch_class.spellings().len() {
            return Err(TheoryError::InvalidSpellingIndex {
                pitch_class: pitch_class.number(),
                index: spelling_index,
            });
        }
        Ok(Note {
            pitch_class,
            spelling_index,
        })
    }

    /// Draw a random pitch class and a random spelling for it that
    /// carries no double accidental.
    pub fn random(rng: &mut impl Rng) -> Note {
        let pitch_class = PitchClass::random(rng);
        let spelling_index = pitch_class.random_simple_spelling(rng);
        Note {
            pitch_class,
            spelling_index,
        }
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn spelling_index(&self) -> usize {
        self.spelling_index
    }

    /// The selected enharmonic spelling, e.g. "Cb".
    pub fn spelling(&self) -> &'static str {
        self.pitch_class.spellings()[self.spelling_index]
    }

    /// The letter of the selected spelling (its staff position).
    pub fn letter(&self) -> char {
        self.spelling().as_bytes()[0] as char
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse a spelling token exactly as it appears in the pitch
    /// table ("A", "F#", "Bbb", ...).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        for pitch_class in PitchClass::all() {
            if let Some(index) = pitch_class.spellings().iter().position(|&sp| sp == s) {
                return Ok(Note {
                    pitch_class,
                    spelling_index: index,
                });
            }
        }
        Err(TheoryError::UnknownSpelling(s.to_string()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
