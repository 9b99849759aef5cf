//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use commander::command::{Command, CommandRegistry, Completer, InputStep, TextInput};
use commander::controller::{Controller, Editor, Navigator};
use commander::keymap::{KeyChord, KeyCode, Keybinding, Modifiers};
use commander::workspace::{FileEditor, ProjectNavigator};
use commander::Commander;

/// One execution seen by [`RecordingController`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub name: String,
    /// Text of the command's input step at execution time
    pub input: Option<String>,
}

/// Controller that records executions instead of acting on them
#[derive(Debug, Default)]
pub struct RecordingController {
    pub executions: Vec<Execution>,
    editor: FileEditor,
    navigator: ProjectNavigator,
}

impl RecordingController {
    pub fn names(&self) -> Vec<&str> {
        self.executions.iter().map(|e| e.name.as_str()).collect()
    }
}

impl Controller for RecordingController {
    fn execute(&mut self, command: &mut dyn Command) {
        let input = command.next_step().map(|s| s.input().text().to_string());
        self.executions.push(Execution {
            name: command.name().to_string(),
            input,
        });
    }

    fn editor(&mut self) -> &mut dyn Editor {
        &mut self.editor
    }

    fn navigator(&mut self) -> &mut dyn Navigator {
        &mut self.navigator
    }
}

/// Command that runs as soon as it is triggered
pub struct Instant {
    name: &'static str,
}

impl Instant {
    pub fn boxed(name: &'static str) -> Box<dyn Command> {
        Box::new(Self { name })
    }
}

impl Command for Instant {
    fn name(&self) -> &str {
        self.name
    }

    fn exec(&mut self, _controller: &mut dyn Controller) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Input step, optionally completed by a single unmodified key instead of Enter
#[derive(Default)]
pub struct Step {
    input: TextInput,
    completes_on: Option<KeyCode>,
}

impl InputStep for Step {
    fn prompt(&self) -> &str {
        "Value"
    }

    fn input(&self) -> &TextInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    fn as_completer(&self) -> Option<&dyn Completer> {
        self.completes_on.map(|_| self as &dyn Completer)
    }
}

impl Completer for Step {
    fn complete(&self, chord: &KeyChord) -> bool {
        self.completes_on == Some(chord.key) && chord.mods.is_empty()
    }
}

/// Command that needs one line of input
pub struct Prompted {
    name: &'static str,
    step: Step,
}

impl Prompted {
    pub fn boxed(name: &'static str) -> Box<dyn Command> {
        Box::new(Self {
            name,
            step: Step::default(),
        })
    }

    /// Completed by `key` rather than Enter
    pub fn completed_by(name: &'static str, key: KeyCode) -> Box<dyn Command> {
        Box::new(Self {
            name,
            step: Step {
                input: TextInput::new(),
                completes_on: Some(key),
            },
        })
    }
}

impl Command for Prompted {
    fn name(&self) -> &str {
        self.name
    }

    fn next_step(&mut self) -> Option<&mut dyn InputStep> {
        Some(&mut self.step)
    }

    fn exec(&mut self, _controller: &mut dyn Controller) -> anyhow::Result<()> {
        Ok(())
    }

    fn reset(&mut self) {
        self.step.input.clear();
    }
}

pub fn ctrl(c: char) -> KeyChord {
    KeyChord::char_with_mods(c, Modifiers::CTRL)
}

pub fn enter() -> KeyChord {
    KeyChord::key(KeyCode::Enter)
}

/// Commander over a recording controller with the given commands and bindings
pub fn commander_with(
    commands: Vec<Box<dyn Command>>,
    bindings: &[(KeyChord, &str)],
) -> Commander<RecordingController> {
    let mut registry = CommandRegistry::new();
    for command in commands {
        registry.register(command);
    }
    let keymap: Vec<Keybinding> = bindings
        .iter()
        .map(|(chord, name)| Keybinding::new(*chord, *name))
        .collect();
    Commander::new(RecordingController::default(), registry, &keymap)
}
