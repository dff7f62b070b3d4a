//! Spell-the-chord rounds: one prompt per tone, labelled by interval

use crate::quiz::prompt::{Prompt, QUIT_HINT};
use crate::quiz::RoundOutcome;
use anyhow::Result;
use arpeggio_core::types::lookup_quality;
use arpeggio_core::Chord;
use colored::*;

/// Run one spelling round: announce the chord, prompt for every tone
/// in order, and judge the round correct only if each answer matched.
/// Wrong answers don't stop the round; the user spells the whole chord
/// before hearing the verdict.
pub fn run_round(prompt: &mut Prompt, chord: &Chord) -> Result<RoundOutcome> {
    println!(
        "Spell {}. {}",
        chord.name().bright_cyan().bold(),
        QUIT_HINT.bright_black()
    );

    let mut all_correct = true;
    for (label, tone) in tone_labels(chord).iter().zip(chord.tones()) {
        let Some(answer) = prompt.read(&format!("{}: ", label.bright_magenta()))? else {
            return Ok(RoundOutcome::Quit);
        };
        if !answer_matches(&answer, tone.spelling()) {
            all_correct = false;
        }
    }

    Ok(if all_correct {
        RoundOutcome::Correct
    } else {
        RoundOutcome::Incorrect
    })
}

/// Prompt labels: "R" for the root, then the interval names in order.
fn tone_labels(chord: &Chord) -> Vec<&'static str> {
    let (_, intervals) =
        lookup_quality(chord.quality()).expect("a built chord's quality is registered");
    let mut labels = Vec::with_capacity(intervals.len() + 1);
    labels.push("R");
    labels.extend(intervals.iter().map(|interval| interval.name()));
    labels
}

/// Spellings are matched ignoring case, so "eb" counts for "Eb".
fn answer_matches(answer: &str, spelling: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(spelling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpeggio_core::Note;

    fn chord(root: &str, quality: &str) -> Chord {
        let root: Note = root.parse().unwrap();
        Chord::build(root, quality).unwrap()
    }

    #[test]
    fn test_tone_labels_follow_intervals() {
        assert_eq!(tone_labels(&chord("A", "major")), vec!["R", "M3", "P5"]);
        assert_eq!(
            tone_labels(&chord("B", "half diminished")),
            vec!["R", "m3", "b5", "m7"]
        );
    }

    #[test]
    fn test_answer_matching_is_case_insensitive() {
        assert!(answer_matches("eb", "Eb"));
        assert!(answer_matches(" C# ", "C#"));
        assert!(answer_matches("ABB", "Abb"));
        assert!(!answer_matches("D#", "Eb"));
        assert!(!answer_matches("", "Eb"));
    }
}
