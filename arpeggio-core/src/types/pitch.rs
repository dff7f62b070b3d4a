use crate::error::{Result, TheoryError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The seven letters of the musical alphabet, in circular order.
/// Letter-distance arithmetic wraps modulo 7 over this array.
pub const MUSICAL_ALPHABET: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// Enharmonic spellings per pitch class, indexed by class - 1.
///
/// Row order is part of the contract: spelling indices are stable, so
/// entries are only ever appended. `x` marks a double sharp, `bb` a
/// double flat. Every row keeps at least one spelling free of double
/// accidentals.
static ENHARMONIC_SPELLINGS: [&[&str]; 12] = [
    &["Gx", "A", "Bbb"],
    &["A#", "Bb", "Cbb"],
    &["Ax", "B", "Cb"],
    &["B#", "C", "Dbb"],
    &["C#", "Db"],
    &["Cx", "D", "Ebb"],
    &["D#", "Eb"],
    &["Dx", "E", "Fb"],
    &["E#", "F", "Gbb"],
    &["Ex", "F#", "Gb"],
    &["Fx", "G", "Abb"],
    &["G#", "Ab"],
];

/// One of the 12 equal-tempered pitch classes, in the representative
/// range [1, 12] (not [0, 11]). Arithmetic wraps modulo 12 within that
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const COUNT: u8 = 12;

    /// Create a pitch class, rejecting values outside [1, 12].
    pub fn new(value: i32) -> Result<Self> {
        if (1..=Self::COUNT as i32).contains(&value) {
            Ok(PitchClass(value as u8))
        } else {
            Err(TheoryError::InvalidPitchClass(value))
        }
    }

    /// The class number in [1, 12].
    pub fn number(self) -> u8 {
        self.0
    }

    /// Step up by a semitone count, wrapping back into [1, 12].
    pub fn step(self, semitones: u8) -> PitchClass {
        PitchClass((self.0 - 1 + semitones) % Self::COUNT + 1)
    }

    /// The valid enharmonic spellings for this class, in table order.
    pub fn spellings(self) -> &'static [&'static str] {
        ENHARMONIC_SPELLINGS[(self.0 - 1) as usize]
    }

    /// Iterate all 12 classes in ascending order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (1..=Self::COUNT).map(PitchClass)
    }

    /// Draw a class uniformly at random.
    pub fn random(rng: &mut impl Rng) -> PitchClass {
        PitchClass(rng.gen_range(1..=Self::COUNT))
    }

    /// Pick a spelling index uniformly among this class's spellings
    /// that carry no double accidental (no trailing "x" or "bb").
    /// Every table row has at least one such spelling.
    pub fn random_simple_spelling(self, rng: &mut impl Rng) -> usize {
        let spellings = self.spellings();
        let simple: Vec<usize> = (0..spellings.len())
            .filter(|&i| !spellings[i].ends_with('x') && !spellings[i].ends_with("bb"))
            .collect();
        *simple
            .choose(rng)
            .expect("every pitch class has a spelling without a double accidental")
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a letter in the musical alphabet, in [0, 6].
pub fn alphabet_index_of(letter: char) -> Result<usize> {
    MUSICAL_ALPHABET
        .iter()
        .position(|&l| l == letter)
        .ok_or(TheoryError::InvalidLetter(letter))
}

/// The letter at a (possibly unwrapped) alphabet position.
pub fn letter_at(index: usize) -> char {
    MUSICAL_ALPHABET[index % MUSICAL_ALPHABET.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pitch_class_range() {
        assert!(PitchClass::new(1).is_ok());
        assert!(PitchClass::new(12).is_ok());
        assert_eq!(
            PitchClass::new(0),
            Err(TheoryError::InvalidPitchClass(0))
        );
        assert_eq!(
            PitchClass::new(13),
            Err(TheoryError::InvalidPitchClass(13))
        );
    }

    #[test]
    fn test_step_wraps_into_range() {
        let a = PitchClass::new(1).unwrap();
        assert_eq!(a.step(4).number(), 5);

        // 10 + 4 semitones wraps to 2, never 0 or 13.
        let fs = PitchClass::new(10).unwrap();
        assert_eq!(fs.step(4).number(), 2);

        let ab = PitchClass::new(12).unwrap();
        assert_eq!(ab.step(12).number(), 12);
        assert_eq!(ab.step(1).number(), 1);
    }

    #[test]
    fn test_every_class_has_spellings() {
        for class in PitchClass::all() {
            let spellings = class.spellings();
            assert!(!spellings.is_empty());
            assert!(spellings.len() >= 2 && spellings.len() <= 3);
        }
    }

    #[test]
    fn test_alphabet_index() {
        assert_eq!(alphabet_index_of('A').unwrap(), 0);
        assert_eq!(alphabet_index_of('G').unwrap(), 6);
        assert_eq!(alphabet_index_of('H'), Err(TheoryError::InvalidLetter('H')));
        assert_eq!(alphabet_index_of('a'), Err(TheoryError::InvalidLetter('a')));
    }

    #[test]
    fn test_letter_at_wraps() {
        assert_eq!(letter_at(0), 'A');
        assert_eq!(letter_at(7), 'A');
        assert_eq!(letter_at(9), 'C');
    }

    #[test]
    fn test_random_simple_spelling_avoids_double_accidentals() {
        let mut rng = StdRng::seed_from_u64(7);
        for class in PitchClass::all() {
            for _ in 0..50 {
                let index = class.random_simple_spelling(&mut rng);
                let spelling = class.spellings()[index];
                assert!(!spelling.ends_with('x'), "picked {}", spelling);
                assert!(!spelling.ends_with("bb"), "picked {}", spelling);
            }
        }
    }

    #[test]
    fn test_random_class_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let class = PitchClass::random(&mut rng);
            assert!((1..=12).contains(&class.number()));
        }
    }
}
