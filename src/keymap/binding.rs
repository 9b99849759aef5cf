//! Keybinding entry: one chord mapped to a command name

use super::types::KeyChord;

/// Command name that removes a chord when layering keymaps
pub const UNBOUND: &str = "Unbound";

/// A configured chord → command entry
///
/// Commands are referenced by name; the commander resolves names against its
/// command registry when the binding table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub chord: KeyChord,
    pub command: String,
}

impl Keybinding {
    pub fn new(chord: KeyChord, command: impl Into<String>) -> Self {
        Self {
            chord,
            command: command.into(),
        }
    }

    /// Create an entry that removes `chord` from an underlying keymap
    pub fn unbind(chord: KeyChord) -> Self {
        Self::new(chord, UNBOUND)
    }

    pub fn is_unbind(&self) -> bool {
        self.command == UNBOUND
    }

    pub fn display_string(&self) -> String {
        self.chord.display_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_binding_holds_command_name() {
        let chord = KeyChord::new(KeyCode::Char('o'), Modifiers::CTRL);
        let binding = Keybinding::new(chord, "OpenFile");

        assert_eq!(binding.chord, chord);
        assert_eq!(binding.command, "OpenFile");
        assert!(!binding.is_unbind());
    }

    #[test]
    fn test_unbind_entry() {
        let binding = Keybinding::unbind(KeyChord::key(KeyCode::F(1)));
        assert!(binding.is_unbind());
        assert_eq!(binding.command, UNBOUND);
    }
}
