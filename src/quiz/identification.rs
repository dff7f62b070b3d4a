//! Name-the-quality rounds: show the tones, ask what chord they spell

use crate::quiz::prompt::{Prompt, QUIT_HINT};
use crate::quiz::RoundOutcome;
use anyhow::Result;
use arpeggio_core::{quality_names, resolve_alias, Chord};
use colored::*;

/// Run one identification round. Input that names no registered
/// quality (even through an alias) is a typo, not an answer: the user
/// is re-prompted until they name some quality or quit.
pub fn run_round(prompt: &mut Prompt, chord: &Chord) -> Result<RoundOutcome> {
    let question = format!(
        "Identify the quality of '{}'. {} ",
        chord.notes_string().bright_cyan().bold(),
        QUIT_HINT.bright_black()
    );
    let Some(mut answer) = prompt.read(&question)? else {
        return Ok(RoundOutcome::Quit);
    };

    loop {
        if let Some(outcome) = judge(&answer, chord) {
            return Ok(outcome);
        }
        let Some(retry) = prompt.read(&format!(
            "Please enter a valid quality (i.e., {}): ",
            quality_menu()
        ))?
        else {
            return Ok(RoundOutcome::Quit);
        };
        answer = retry;
    }
}

/// `None` when the input names no registered quality and the user
/// should be asked again.
fn judge(answer: &str, chord: &Chord) -> Option<RoundOutcome> {
    resolve_alias(answer).map(|quality| {
        if quality == chord.quality() {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Incorrect
        }
    })
}

fn quality_menu() -> String {
    quality_names()
        .map(|quality| format!("'{}'", quality))
        .collect::<Vec<_>>()
        .join(", ")
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
    fn test_judge_exact_name() {
        let chord = chord("B", "diminished");
        assert_eq!(judge("diminished", &chord), Some(RoundOutcome::Correct));
        assert_eq!(judge("minor", &chord), Some(RoundOutcome::Incorrect));
    }

    #[test]
    fn test_judge_through_alias_and_case() {
        let chord = chord("C", "half diminished");
        assert_eq!(judge("m7b5", &chord), Some(RoundOutcome::Correct));
        assert_eq!(judge("Half Diminished", &chord), Some(RoundOutcome::Correct));
        assert_eq!(judge("dim7", &chord), Some(RoundOutcome::Incorrect));
    }

    #[test]
    fn test_judge_rejects_typos_for_reprompt() {
        let chord = chord("A", "major");
        assert_eq!(judge("majorr", &chord), None);
        assert_eq!(judge("", &chord), None);
    }

    #[test]
    fn test_quality_menu_lists_registry() {
        let menu = quality_menu();
        assert!(menu.starts_with("'major'"));
        assert!(menu.contains("'half diminished'"));
    }
}
