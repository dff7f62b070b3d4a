use thiserror::Error;

/// Errors raised by the theory engine.
///
/// All variants are raised synchronously and are final for that call;
/// there is no transient failure mode worth retrying. Callers that take
/// free-form user input (the quiz layer) are expected to re-prompt on
/// `UnknownQuality` / `UnknownSpelling` rather than treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Pitch classes live in the representative range [1, 12].
    #[error("pitch class must be in 1-12, got {0}")]
    InvalidPitchClass(i32),

    /// The musical alphabet is the seven letters A-G.
    #[error("letter must be A-G, got '{0}'")]
    InvalidLetter(char),

    /// A spelling index must address an entry of its pitch class's
    /// enharmonic table row.
    #[error("pitch class {pitch_class} has no spelling at index {index}")]
    InvalidSpellingIndex { pitch_class: u8, index: usize },

    /// The name is not in the quality registry.
    #[error("unknown quality '{0}'")]
    UnknownQuality(String),

    /// The token is not an enharmonic spelling in the pitch table.
    #[error("unknown note spelling '{0}'")]
    UnknownSpelling(String),

    /// No spelling of the computed pitch class starts with the letter
    /// the interval's generic size demands. This is a table-consistency
    /// failure, not a user input error: it cannot happen for natural or
    /// single-accidental roots except under the flattest seventh
    /// qualities (e.g. a diminished 7 built on Cb would need a
    /// triple-flat name the table does not carry).
    #[error("no '{letter}' spelling exists for pitch class {pitch_class}")]
    SpellingResolutionFailure { letter: char, pitch_class: u8 },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
