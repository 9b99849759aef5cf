//! Binding table: chord → command lookup

use std::collections::HashMap;

use super::types::KeyChord;
use crate::command::CommandId;

/// Maps each chord to at most one command
///
/// Registering a chord that is already bound replaces the old command. The
/// table does not reserve any keys: completion keys handled by the command
/// box (Enter) may be bound like any other chord.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: HashMap<KeyChord, CommandId>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `chord` to `command`, returning the command it was bound to before
    pub fn register(&mut self, chord: KeyChord, command: CommandId) -> Option<CommandId> {
        let previous = self.bindings.insert(chord, command);
        if let Some(old) = previous {
            if old != command {
                tracing::debug!("Rebinding {} from {:?} to {:?}", chord, old, command);
            }
        }
        previous
    }

    /// Look up the command bound to `chord`
    pub fn resolve(&self, chord: &KeyChord) -> Option<CommandId> {
        self.bindings.get(chord).copied()
    }

    /// Remove the binding for `chord`
    pub fn unbind(&mut self, chord: &KeyChord) -> Option<CommandId> {
        self.bindings.remove(chord)
    }

    /// All chords bound to `command`, sorted by display string
    pub fn chords_for(&self, command: CommandId) -> Vec<KeyChord> {
        let mut chords: Vec<KeyChord> = self
            .bindings
            .iter()
            .filter(|(_, id)| **id == command)
            .map(|(chord, _)| *chord)
            .collect();
        chords.sort_by_key(|chord| chord.display_string());
        chords
    }

    /// Display string for every chord bound to `command`, joined with ", "
    pub fn display_for(&self, command: CommandId) -> Option<String> {
        let chords = self.chords_for(command);
        if chords.is_empty() {
            return None;
        }
        Some(
            chords
                .iter()
                .map(|chord| chord.display_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyChord, &CommandId)> {
        self.bindings.iter()
    }
}
