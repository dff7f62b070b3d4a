use crate::error::{Result, TheoryError};
use crate::types::interval::Interval;
use crate::types::note::Note;
use crate::types::pitch::{alphabet_index_of, letter_at};
use crate::types::quality::lookup_quality;
use std::fmt;

/// A chord: a root note, a registered quality, and the fully spelled
/// tone list derived from them (root first).
///
/// Construction is two-phase and pure. Phase one walks the quality's
/// intervals and computes each tone's pitch class; phase two resolves
/// each non-root tone to the spelling whose letter the interval's
/// generic size predicts. The root's own spelling is never reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    quality: &'static str,
    tones: Vec<Note>,
}

impl Chord {
    /// Build a chord from a root note and a canonical quality name.
    ///
    /// Fails with `UnknownQuality` for unregistered names, and with
    /// `SpellingResolutionFailure` when a tone's predicted letter has
    /// no spelling in the pitch table (only reachable from roots whose
    /// chords would need accidentals beyond double flats).
    pub fn build(root: Note, quality: &str) -> Result<Chord> {
        let (quality, intervals) = lookup_quality(quality)?;
        let root_letter_index = alphabet_index_of(root.letter())?;

        let mut tones = Vec::with_capacity(intervals.len() + 1);
        tones.push(root);
        for interval in intervals {
            tones.push(Self::resolve_tone(root, root_letter_index, *interval)?);
        }

        Ok(Chord { quality, tones })
    }

    /// Spell the tone one interval above the root: the pitch class
    /// comes from semitone arithmetic, the spelling from stepping the
    /// musical alphabet forward by the generic size minus one.
    fn resolve_tone(root: Note, root_letter_index: usize, interval: Interval) -> Result<Note> {
        let pitch_class = root.pitch_class().step(interval.semitones());
        let letter = letter_at(root_letter_index + interval.generic_size() - 1);
        let spelling_index = pitch_class
            .spellings()
            .iter()
            .position(|s| s.starts_with(letter))
            .ok_or(TheoryError::SpellingResolutionFailure {
                letter,
                pitch_class: pitch_class.number(),
            })?;
        Note::new(pitch_class, spelling_index)
    }

    pub fn root(&self) -> Note {
        self.tones[0]
    }

    /// The canonical quality name this chord was built with.
    pub fn quality(&self) -> &'static str {
        self.quality
    }

    /// All tones in order, root first.
    pub fn tones(&self) -> &[Note] {
        &self.tones
    }

    /// The chord's name, e.g. "Cb major".
    pub fn name(&self) -> String {
        format!("{} {}", self.root(), self.quality)
    }

    /// The comma-joined tone spellings, e.g. "Cb, Eb, Gb".
    pub fn notes_string(&self) -> String {
        self.tones
            .iter()
            .map(|note| note.spelling())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.notes_string())
    }
}
