//! One-line command box: stages commands that still need user input
//!
//! The box never owns commands. It keeps the handle of the command in
//! progress and reads that command's input step from the registry when asked.
//!
//! ```text
//!          run(no step)              run(step)
//!   Idle ──────────────▶ Ready      Idle ─────────▶ AwaitingInput
//!    ▲                     │         ▲                   │
//!    └────── clear() ──────┘         └───── clear() ─────┘
//! ```
//!
//! `run` on a command without a step records it as current in the `Ready`
//! state, so the caller can execute `current()` right away before clearing.

use crate::command::{CommandId, CommandRegistry, InputStep, TextInput};

/// Observable state of the command box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    /// No command in progress
    Idle,
    /// A command is current and can execute without further input
    Ready,
    /// A command is staged and waiting for its input step to complete
    AwaitingInput,
}

#[derive(Debug, Default)]
pub struct CommandBox {
    current: Option<CommandId>,
    /// Whether `current` is waiting on input (as opposed to ready to run)
    staged: bool,
    focused: bool,
    /// Typed command name while no command is staged
    line: TextInput,
}

impl CommandBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `command`, returning true if it needs input before executing
    ///
    /// A command with an input step becomes current and the box takes focus.
    /// Running while another command is staged replaces it and resets the
    /// replaced command.
    pub fn run(&mut self, command: CommandId, registry: &mut CommandRegistry) -> bool {
        let requires_input = registry
            .get_mut(command)
            .map(|c| c.next_step().is_some())
            .unwrap_or(false);

        if let Some(previous) = self.current.filter(|prev| self.staged && *prev != command) {
            tracing::debug!("Replacing staged command {:?} with {:?}", previous, command);
            if let Some(replaced) = registry.get_mut(previous) {
                replaced.reset();
            }
        }

        self.current = Some(command);
        self.staged = requires_input;
        self.line.clear();
        if requires_input {
            self.focused = true;
        }
        requires_input
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// The command in progress, if any
    pub fn current(&self) -> Option<CommandId> {
        self.current
    }

    pub fn state(&self) -> BoxState {
        match (self.current, self.staged) {
            (None, _) => BoxState::Idle,
            (Some(_), true) => BoxState::AwaitingInput,
            (Some(_), false) => BoxState::Ready,
        }
    }

    /// Reset to Idle and give up focus
    pub fn clear(&mut self) {
        self.current = None;
        self.staged = false;
        self.focused = false;
        self.line.clear();
    }

    /// Take focus without a staged command, for typing a command name
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Lose focus, keeping any staged command
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// The typed command name
    pub fn line(&self) -> &TextInput {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut TextInput {
        &mut self.line
    }

    /// Input step of the staged command
    pub fn step<'r>(&self, registry: &'r mut CommandRegistry) -> Option<&'r mut dyn InputStep> {
        if !self.staged {
            return None;
        }
        registry.get_mut(self.current?)?.next_step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, InputStep};
    use crate::controller::Controller;

    struct Instant;

    impl Command for Instant {
        fn name(&self) -> &str {
            "Instant"
        }

        fn exec(&mut self, _controller: &mut dyn Controller) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Prompted {
        input: TextInput,
    }

    impl InputStep for Prompted {
        fn prompt(&self) -> &str {
            "Name"
        }

        fn input(&self) -> &TextInput {
            &self.input
        }

        fn input_mut(&mut self) -> &mut TextInput {
            &mut self.input
        }
    }

    impl Command for Prompted {
        fn name(&self) -> &str {
            "Prompted"
        }

        fn next_step(&mut self) -> Option<&mut dyn InputStep> {
            Some(self)
        }

        fn exec(&mut self, _controller: &mut dyn Controller) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn registry() -> (CommandRegistry, CommandId, CommandId) {
        let mut registry = CommandRegistry::new();
        let instant = registry.register(Box::new(Instant));
        let prompted = registry.register(Box::new(Prompted::default()));
        (registry, instant, prompted)
    }

    #[test]
    fn test_new_box_is_idle() {
        let command_box = CommandBox::new();
        assert_eq!(command_box.state(), BoxState::Idle);
        assert!(!command_box.has_focus());
        assert_eq!(command_box.current(), None);
    }

    #[test]
    fn test_run_without_step() {
        let (mut registry, instant, _) = registry();
        let mut command_box = CommandBox::new();

        assert!(!command_box.run(instant, &mut registry));
        assert_eq!(command_box.current(), Some(instant));
        assert!(!command_box.has_focus());
        assert_eq!(command_box.state(), BoxState::Ready);
        assert!(command_box.step(&mut registry).is_none());

        command_box.clear();
        assert_eq!(command_box.state(), BoxState::Idle);
    }

    #[test]
    fn test_run_with_step_stages_and_focuses() {
        let (mut registry, _, prompted) = registry();
        let mut command_box = CommandBox::new();

        assert!(command_box.run(prompted, &mut registry));
        assert_eq!(command_box.current(), Some(prompted));
        assert!(command_box.has_focus());
        assert_eq!(command_box.state(), BoxState::AwaitingInput);
        assert_eq!(command_box.step(&mut registry).unwrap().prompt(), "Name");
    }

    #[test]
    fn test_run_replaces_staged_command() {
        let (mut registry, instant, prompted) = registry();
        let mut command_box = CommandBox::new();

        command_box.run(prompted, &mut registry);
        assert!(!command_box.run(instant, &mut registry));
        assert_eq!(command_box.current(), Some(instant));
        assert_eq!(command_box.state(), BoxState::Ready);
    }

    #[test]
    fn test_clear_resets() {
        let (mut registry, _, prompted) = registry();
        let mut command_box = CommandBox::new();

        command_box.run(prompted, &mut registry);
        command_box.clear();

        assert_eq!(command_box.current(), None);
        assert!(!command_box.has_focus());
        assert_eq!(command_box.state(), BoxState::Idle);
        // The command itself survives in the registry
        assert!(registry.get(prompted).is_some());
    }

    #[test]
    fn test_clear_on_idle_is_noop() {
        let mut command_box = CommandBox::new();
        command_box.clear();
        command_box.clear();
        assert_eq!(command_box.current(), None);
        assert_eq!(command_box.state(), BoxState::Idle);
    }

    #[test]
    fn test_focus_and_blur() {
        let (mut registry, _, prompted) = registry();
        let mut command_box = CommandBox::new();

        command_box.focus();
        assert!(command_box.has_focus());
        assert_eq!(command_box.state(), BoxState::Idle);

        command_box.run(prompted, &mut registry);
        command_box.blur();
        assert!(!command_box.has_focus());
        assert_eq!(command_box.state(), BoxState::AwaitingInput);
    }

    #[test]
    fn test_run_clears_typed_line() {
        let (mut registry, _, prompted) = registry();
        let mut command_box = CommandBox::new();

        command_box.focus();
        command_box.line_mut().insert("Prompted");
        command_box.run(prompted, &mut registry);
        assert!(command_box.line().is_empty());
    }
}
