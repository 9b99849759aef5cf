//! Commands and their input steps
//!
//! A command is created once, registered in a [`CommandRegistry`], and reused
//! for every invocation. Commands that need user input before they can run
//! expose an [`InputStep`] through [`Command::next_step`]; the command box
//! stages such commands until the step completes.
//!
//! Completion defaults to an unmodified Enter. A step that wants a different
//! rule also implements [`Completer`] and returns itself from
//! [`InputStep::as_completer`].

mod add_project;
mod input;
mod open_file;
mod open_path;
mod registry;

pub use add_project::{ProjectAdder, ADD_PROJECT};
pub use input::{TextEdit, TextInput};
pub use open_file::{FileOpener, OPEN_FILE};
pub use open_path::{expand_home, PathOpener, OPEN_PATH};
pub use registry::{CommandId, CommandRegistry};

use crate::controller::Controller;
use crate::keymap::KeyChord;

/// An executable editor command
pub trait Command {
    /// Name used in keymaps and for typed command entry
    fn name(&self) -> &str;

    /// The input still needed before the command can run
    ///
    /// `None` means the command executes as soon as it is triggered. Must
    /// return the same step on repeated calls until the command is reset.
    fn next_step(&mut self) -> Option<&mut dyn InputStep> {
        None
    }

    /// Run the command against the controller's live editing surface
    fn exec(&mut self, controller: &mut dyn Controller) -> anyhow::Result<()>;

    /// Drop per-run state so the next invocation starts fresh
    fn reset(&mut self) {}
}

/// A single line of user input gathered in the command box
pub trait InputStep {
    /// Label shown in front of the input line
    fn prompt(&self) -> &str;

    fn input(&self) -> &TextInput;

    fn input_mut(&mut self) -> &mut TextInput;

    /// Custom completion rule, if this step has one
    fn as_completer(&self) -> Option<&dyn Completer> {
        None
    }
}

/// Decides whether a key event finishes the current input step
pub trait Completer {
    fn complete(&self, chord: &KeyChord) -> bool;
}

/// Build a registry holding the built-in commands
pub fn builtin_commands() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(FileOpener::new()));
    registry.register(Box::new(ProjectAdder::new()));
    registry.register(Box::new(PathOpener::new()));
    registry
}
