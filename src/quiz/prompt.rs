//! Line input with quit-sentinel and interrupt handling

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Reminder appended to round announcements.
pub const QUIT_HINT: &str = "(Type 'quit' at any time to stop.)";

/// Wraps the rustyline editor so every read answers one question:
/// either the user's trimmed input, or `None` once they ask to stop —
/// via the quit sentinel, Ctrl+C, or Ctrl+D.
pub struct Prompt {
    editor: DefaultEditor,
}

impl Prompt {
    pub fn new() -> Result<Self> {
        Ok(Prompt {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one line under the given label. `None` ends the session.
    pub fn read(&mut self, label: &str) -> Result<Option<String>> {
        match self.editor.readline(label) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(&line);
                }
                if line.eq_ignore_ascii_case("quit") {
                    Ok(None)
                } else {
                    Ok(Some(line))
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
