//! Single-line text input used by the command box and input steps

use crate::keymap::{KeyChord, KeyCode};

/// Line-editing operations the command box understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    DeleteBackward,
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
}

impl TextEdit {
    /// Map an unmodified editing key to its operation
    pub fn from_chord(chord: &KeyChord) -> Option<TextEdit> {
        if !chord.mods.is_empty() {
            return None;
        }
        match chord.key {
            KeyCode::Backspace => Some(TextEdit::DeleteBackward),
            KeyCode::Delete => Some(TextEdit::DeleteForward),
            KeyCode::Left => Some(TextEdit::MoveLeft),
            KeyCode::Right => Some(TextEdit::MoveRight),
            KeyCode::Home => Some(TextEdit::MoveHome),
            KeyCode::End => Some(TextEdit::MoveEnd),
            _ => None,
        }
    }
}

/// Editable line of text with a cursor measured in characters
///
/// Newlines are never stored; inserted line breaks become spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        let mut input = Self::new();
        input.insert(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    /// Insert text at the cursor
    pub fn insert(&mut self, text: &str) {
        let clean: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .filter(|c| !c.is_control() || *c == ' ')
            .collect();
        if clean.is_empty() {
            return;
        }
        let offset = self.byte_offset(self.cursor);
        self.text.insert_str(offset, &clean);
        self.cursor += clean.chars().count();
    }

    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn apply(&mut self, edit: TextEdit) {
        match edit {
            TextEdit::DeleteBackward => self.delete_backward(),
            TextEdit::DeleteForward => self.delete_forward(),
            TextEdit::MoveLeft => self.move_left(),
            TextEdit::MoveRight => self.move_right(),
            TextEdit::MoveHome => self.move_home(),
            TextEdit::MoveEnd => self.move_end(),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}
