//! Interactive chord quizzes over the spelling engine
//!
//! A session picks one practice mode, then loops: draw a random root
//! and quality, build the chord, run a round, print the verdict with
//! the full answer. Randomness lives entirely in the draw; the rounds
//! themselves are deterministic functions of the chord and the user's
//! keystrokes.

pub mod identification;
pub mod prompt;
pub mod spelling;

use crate::quiz::prompt::Prompt;
use anyhow::Result;
use arpeggio_core::{random_quality, Chord, Note, TheoryError};
use colored::*;
use rand::Rng;

/// Which practice mode a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    /// The user types every tone of a named chord.
    Spelling,
    /// The user names the quality of a displayed chord.
    Identification,
}

/// What a single round ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    Incorrect,
    Quit,
}

/// Start an interactive session on stdin/stdout.
pub fn run() -> Result<()> {
    let mut prompt = Prompt::new()?;

    println!(
        "{} {}",
        "🎹".bright_yellow(),
        "Arpeggio - chord spelling trainer".bright_cyan().bold()
    );
    println!(
        "Every chord tone has exactly one correct name: the third above {} is {}, never {}.\n",
        "Cb".cyan(),
        "Eb".cyan(),
        "D#".red()
    );

    let Some(kind) = select_kind(&mut prompt)? else {
        return Ok(());
    };

    let mut rng = rand::thread_rng();
    loop {
        let chord = next_chord(&mut rng)?;
        let outcome = match kind {
            QuizKind::Spelling => spelling::run_round(&mut prompt, &chord)?,
            QuizKind::Identification => identification::run_round(&mut prompt, &chord)?,
        };

        let answer = format!("{} is spelled '{}.'", chord.name(), chord.notes_string());
        match outcome {
            RoundOutcome::Correct => {
                println!("{} {}\n", "✓ Correct!".bright_green().bold(), answer)
            }
            RoundOutcome::Incorrect => {
                println!("{} {}\n", "✗ Not quite.".bright_red().bold(), answer)
            }
            RoundOutcome::Quit => break,
        }
    }

    println!("{} 🎹", "Goodbye!".bright_cyan());
    Ok(())
}

/// Ask which quiz to run until the answer is one of the menu options.
/// `None` means the user quit at the menu.
fn select_kind(prompt: &mut Prompt) -> Result<Option<QuizKind>> {
    let menu = "('1' = spelling, '2' = identifying)";
    let mut answer = prompt.read(&format!(
        "Practice spelling or identifying chords? {}: ",
        menu
    ))?;
    loop {
        match answer.as_deref().map(str::trim) {
            None => return Ok(None),
            Some("1") => return Ok(Some(QuizKind::Spelling)),
            Some("2") => return Ok(Some(QuizKind::Identification)),
            Some(_) => {
                answer = prompt.read(&format!("Please enter a valid option {}: ", menu))?;
            }
        }
    }
}

/// Draw the next round's chord. The rare random pairs whose spelling
/// runs past the enharmonic table (e.g. a diminished 7 on Cb) are
/// redrawn; any other error is a real failure.
fn next_chord(rng: &mut impl Rng) -> Result<Chord> {
    loop {
        let root = Note::random(rng);
        let quality = random_quality(rng, &[])?;
        match Chord::build(root, quality) {
            Ok(chord) => return Ok(chord),
            Err(TheoryError::SpellingResolutionFailure { .. }) => continue,
            Err(err) => return Err(err.into()),
        }
    }
}
