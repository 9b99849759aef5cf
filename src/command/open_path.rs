//! OpenPath: prompt for a path and open it in the editor

use std::path::PathBuf;

use anyhow::bail;

use super::{Command, Completer, InputStep, TextInput};
use crate::controller::Controller;
use crate::keymap::KeyChord;

pub const OPEN_PATH: &str = "OpenPath";

/// Expand a leading `~` to the user's home directory
pub fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Path prompt that refuses to complete while empty
#[derive(Debug, Default)]
struct FilePathStep {
    input: TextInput,
}

impl InputStep for FilePathStep {
    fn prompt(&self) -> &str {
        "Open file"
    }

    fn input(&self) -> &TextInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    fn as_completer(&self) -> Option<&dyn Completer> {
        Some(self)
    }
}

impl Completer for FilePathStep {
    fn complete(&self, chord: &KeyChord) -> bool {
        chord.is_plain_enter() && !self.input.text().trim().is_empty()
    }
}

/// Opens a file typed in the command box
#[derive(Debug, Default)]
pub struct PathOpener {
    step: FilePathStep,
}

impl PathOpener {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for PathOpener {
    fn name(&self) -> &str {
        OPEN_PATH
    }

    fn next_step(&mut self) -> Option<&mut dyn InputStep> {
        Some(&mut self.step)
    }

    fn exec(&mut self, controller: &mut dyn Controller) -> anyhow::Result<()> {
        let raw = self.step.input.text().trim();
        if raw.is_empty() {
            bail!("No file path given");
        }
        let path = expand_home(raw);
        controller.editor().open(&path)
    }

    fn reset(&mut self) {
        self.step.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyCode, Modifiers};

    #[test]
    fn test_always_requires_input() {
        let mut opener = PathOpener::new();
        let step = opener.next_step().expect("OpenPath prompts for a path");
        assert_eq!(step.prompt(), "Open file");
        assert!(step.as_completer().is_some());
    }

    #[test]
    fn test_completer_needs_text() {
        let mut step = FilePathStep::default();
        let enter = KeyChord::key(KeyCode::Enter);
        assert!(!step.complete(&enter));

        step.input.insert("   ");
        assert!(!step.complete(&enter));

        step.input.insert("main.rs");
        assert!(step.complete(&enter));
        assert!(!step.complete(&KeyChord::new(KeyCode::Enter, Modifiers::SHIFT)));
        assert!(!step.complete(&KeyChord::key(KeyCode::Tab)));
    }

    #[test]
    fn test_reset_clears_path() {
        let mut opener = PathOpener::new();
        opener.next_step().unwrap().input_mut().insert("a.txt");
        opener.reset();
        assert!(opener.next_step().unwrap().input().is_empty());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("src/lib.rs"), PathBuf::from("src/lib.rs"));
        assert_eq!(expand_home("/tmp/x"), PathBuf::from("/tmp/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/notes.md"), home.join("notes.md"));
        }
    }
}
