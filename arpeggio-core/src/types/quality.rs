use crate::error::{Result, TheoryError};
use crate::types::interval::Interval;
use rand::seq::SliceRandom;
use rand::Rng;

/// The chord quality registry: canonical name -> ordered intervals
/// above the root. A closed table; extending it is adding a row.
static QUALITIES: &[(&str, &[Interval])] = &[
    ("major", &[Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH]),
    ("minor", &[Interval::MINOR_THIRD, Interval::PERFECT_FIFTH]),
    ("diminished", &[Interval::MINOR_THIRD, Interval::DIMINISHED_FIFTH]),
    ("augmented", &[Interval::MAJOR_THIRD, Interval::AUGMENTED_FIFTH]),
    (
        "major 7",
        &[
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SEVENTH,
        ],
    ),
    (
        "dominant 7",
        &[
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SEVENTH,
        ],
    ),
    (
        "minor 7",
        &[
            Interval::MINOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SEVENTH,
        ],
    ),
    (
        "half diminished",
        &[
            Interval::MINOR_THIRD,
            Interval::DIMINISHED_FIFTH,
            Interval::MINOR_SEVENTH,
        ],
    ),
    (
        "diminished 7",
        &[
            Interval::MINOR_THIRD,
            Interval::DIMINISHED_FIFTH,
            Interval::DIMINISHED_SEVENTH,
        ],
    ),
];

/// Shorthand a user may type for a quality, matched case-insensitively.
/// Only entries that stay unambiguous under case folding are listed
/// ("m7" folds together with "M7", so minor 7 owns it and major 7 is
/// reached via "maj7").
static ALIASES: &[(&str, &str)] = &[
    ("maj", "major"),
    ("min", "minor"),
    ("m", "minor"),
    ("dim", "diminished"),
    ("aug", "augmented"),
    ("maj7", "major 7"),
    ("7", "dominant 7"),
    ("dom7", "dominant 7"),
    ("m7", "minor 7"),
    ("min7", "minor 7"),
    ("m7b5", "half diminished"),
    ("min7b5", "half diminished"),
    ("dim7", "diminished 7"),
    ("o7", "diminished 7"),
];

/// The ordered intervals of a registered quality, with its canonical
/// `'static` name. Names are exact; alias folding is the caller's job
/// via [`resolve_alias`].
pub fn lookup_quality(name: &str) -> Result<(&'static str, &'static [Interval])> {
    QUALITIES
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|&(registered, intervals)| (registered, intervals))
        .ok_or_else(|| TheoryError::UnknownQuality(name.to_string()))
}

/// All registered quality names, in table order.
pub fn quality_names() -> impl Iterator<Item = &'static str> {
    QUALITIES.iter().map(|&(name, _)| name)
}

/// Draw a quality name uniformly: from `candidates` when it is
/// non-empty (each entry must be registered), otherwise from the whole
/// registry.
pub fn random_quality(rng: &mut impl Rng, candidates: &[&str]) -> Result<&'static str> {
    if candidates.is_empty() {
        let &(name, _) = QUALITIES
            .choose(rng)
            .expect("the quality registry is never empty");
        return Ok(name);
    }
    let chosen = candidates
        .choose(rng)
        .expect("candidates checked non-empty above");
    let (name, _) = lookup_quality(chosen)?;
    Ok(name)
}

/// Fold user input to the canonical quality name it denotes, if any.
/// Canonical names resolve to themselves; aliases go through the
/// closed table. Matching is case-insensitive either way.
pub fn resolve_alias(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if let Some(&(name, _)) = QUALITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
    {
        return Some(name);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(input))
        .map(|&(_, name)| name)
}

/// Whether `input` denotes exactly the given canonical quality.
pub fn is_valid_alias(input: &str, quality: &str) -> bool {
    resolve_alias(input) == Some(quality) && lookup_quality(quality).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lookup_known_quality() {
        let (name, intervals) = lookup_quality("major").unwrap();
        assert_eq!(name, "major");
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0], Interval::MAJOR_THIRD);
    }

    #[test]
    fn test_lookup_unknown_quality() {
        assert_eq!(
            lookup_quality("augmented13"),
            Err(TheoryError::UnknownQuality("augmented13".to_string()))
        );
    }

    #[test]
    fn test_every_quality_references_registered_intervals() {
        for (_, intervals) in QUALITIES {
            for interval in *intervals {
                assert_eq!(Interval::lookup(interval.name()), Some(*interval));
            }
        }
    }

    #[test]
    fn test_first_interval_is_a_third() {
        // Spelling starts from the third, so every quality leads with one.
        for (name, intervals) in QUALITIES {
            assert_eq!(intervals[0].generic_size(), 3, "quality {}", name);
        }
    }

    #[test]
    fn test_random_quality_over_registry() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let name = random_quality(&mut rng, &[]).unwrap();
            assert!(lookup_quality(name).is_ok());
        }
    }

    #[test]
    fn test_random_quality_over_candidates() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = ["minor", "diminished"];
        for _ in 0..50 {
            let name = random_quality(&mut rng, &candidates).unwrap();
            assert!(candidates.contains(&name));
        }
    }

    #[test]
    fn test_random_quality_rejects_unregistered_candidate() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = random_quality(&mut rng, &["sus4"]);
        assert_eq!(
            result,
            Err(TheoryError::UnknownQuality("sus4".to_string()))
        );
    }

    #[test]
    fn test_alias_resolution() {
        assert_eq!(resolve_alias("maj"), Some("major"));
        assert_eq!(resolve_alias("MAJ"), Some("major"));
        assert_eq!(resolve_alias("m7b5"), Some("half diminished"));
        assert_eq!(resolve_alias("Dim7"), Some("diminished 7"));
        assert_eq!(resolve_alias("major"), Some("major"));
        assert_eq!(resolve_alias("Half Diminished"), Some("half diminished"));
        assert_eq!(resolve_alias("sus4"), None);
    }

    #[test]
    fn test_is_valid_alias() {
        assert!(is_valid_alias("maj", "major"));
        assert!(is_valid_alias("minor", "minor"));
        assert!(is_valid_alias("M7B5", "half diminished"));
        assert!(!is_valid_alias("maj", "minor"));
        assert!(!is_valid_alias("m7", "major 7"));
    }
}
