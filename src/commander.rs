//! Commander: routes key presses to commands
//!
//! The commander owns the command registry, the binding table and the command
//! box, and holds the controller commands execute against. Hosts feed every
//! key press to [`Commander::key_press`] first; only unconsumed events should
//! reach the underlying editor.
//!
//! A single key press can be both a bound chord and a completion key. Both
//! are computed up front and reconciled: a bound chord whose command needs
//! input stages it and ends handling, while a bound chord whose command runs
//! immediately forces completion on the same key press.

use crate::command::{builtin_commands, CommandId, CommandRegistry, TextEdit, TextInput};
use crate::command_box::{BoxState, CommandBox};
use crate::config::CommanderConfig;
use crate::controller::Controller;
use crate::keymap::{load_keymap, BindingTable, KeyChord, Keybinding, KeymapError};

pub struct Commander<C> {
    controller: C,
    registry: CommandRegistry,
    bindings: BindingTable,
    command_box: CommandBox,
}

impl<C: Controller> Commander<C> {
    /// Create a commander from explicit configuration
    ///
    /// `keymap` entries are applied in order, so later entries for the same
    /// chord win. Entries naming unknown commands are logged and skipped;
    /// `Unbound` entries remove the chord.
    pub fn new(controller: C, registry: CommandRegistry, keymap: &[Keybinding]) -> Self {
        let mut commander = Self {
            controller,
            registry,
            bindings: BindingTable::new(),
            command_box: CommandBox::new(),
        };

        for binding in keymap {
            if binding.is_unbind() {
                commander.bindings.unbind(&binding.chord);
                continue;
            }
            if let Err(e) = commander.bind(binding.chord, &binding.command) {
                tracing::warn!("Skipping binding {}: {}", binding.display_string(), e);
            }
        }

        tracing::debug!(
            "Commander ready with {} commands and {} bindings",
            commander.registry.len(),
            commander.bindings.len()
        );
        commander
    }

    /// Built-in commands with the keymap layered from `config`
    pub fn with_config(controller: C, config: &CommanderConfig) -> Self {
        Self::new(controller, builtin_commands(), &load_keymap(config))
    }

    /// Built-in commands with the default keymap layers
    pub fn with_defaults(controller: C) -> Self {
        Self::with_config(controller, &CommanderConfig::default())
    }

    /// Bind `chord` to the command registered as `name`
    ///
    /// Returns the command the chord was bound to before, if any.
    pub fn bind(&mut self, chord: KeyChord, name: &str) -> Result<Option<CommandId>, KeymapError> {
        let id = self
            .registry
            .find(name)
            .ok_or_else(|| KeymapError::UnknownCommand(name.to_string()))?;
        Ok(self.bindings.register(chord, id))
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn command_box(&self) -> &CommandBox {
        &self.command_box
    }

    /// Handle a key press, returning true if it was consumed
    pub fn key_press(&mut self, chord: KeyChord) -> bool {
        let mut done = self.completes(&chord);

        if let Some(id) = self.bindings.resolve(&chord) {
            if self.command_box.run(id, &mut self.registry) {
                tracing::debug!("{} staged {}", chord, self.command_label(id));
                return true;
            }
            done = true;
        }

        if done {
            self.finish();
            return true;
        }

        false
    }

    /// Whether `chord` completes the input the box is holding
    ///
    /// An unfocused box never completes. A staged step with a Completer
    /// decides on its own; everything else falls back to unmodified Enter.
    fn completes(&mut self, chord: &KeyChord) -> bool {
        if !self.command_box.has_focus() {
            return false;
        }

        let custom = self
            .command_box
            .step(&mut self.registry)
            .and_then(|step| step.as_completer().map(|c| c.complete(chord)));

        custom.unwrap_or_else(|| chord.is_plain_enter())
    }

    /// Execute whatever the box holds, then clear it
    fn finish(&mut self) {
        match self.command_box.current() {
            Some(id) => self.execute(id),
            None => {
                if self.run_typed_command() {
                    return;
                }
            }
        }
        self.command_box.clear();
    }

    fn execute(&mut self, id: CommandId) {
        let Some(command) = self.registry.get_mut(id) else {
            tracing::warn!("Box held unknown command {:?}", id);
            return;
        };
        tracing::debug!("Executing {}", command.name());
        self.controller.execute(command);
        command.reset();
    }

    /// Run the command named in the box line; true if it was staged
    fn run_typed_command(&mut self) -> bool {
        let typed = self.command_box.line_mut().take();
        let name = typed.trim();
        if name.is_empty() {
            return false;
        }

        let Some(id) = self.registry.find(name) else {
            tracing::warn!("Unknown command: {}", name);
            return false;
        };

        if self.command_box.run(id, &mut self.registry) {
            tracing::debug!("Typed command staged {}", name);
            return true;
        }
        self.execute(id);
        false
    }

    /// Insert typed text into the focused box, returning true if it was taken
    pub fn insert_text(&mut self, text: &str) -> bool {
        match self.active_line() {
            Some(line) => {
                line.insert(text);
                true
            }
            None => false,
        }
    }

    /// Apply a line-editing key to the focused box, returning true if handled
    pub fn edit_key(&mut self, chord: KeyChord) -> bool {
        let Some(edit) = TextEdit::from_chord(&chord) else {
            return false;
        };
        match self.active_line() {
            Some(line) => {
                line.apply(edit);
                true
            }
            None => false,
        }
    }

    /// The line the user is typing into: the staged step's input, or the
    /// box's own command-name line
    fn active_line(&mut self) -> Option<&mut TextInput> {
        if !self.command_box.has_focus() {
            return None;
        }
        if self.command_box.state() == BoxState::AwaitingInput {
            return self
                .command_box
                .step(&mut self.registry)
                .map(|step| step.input_mut());
        }
        Some(self.command_box.line_mut())
    }

    /// Focus the idle box so a command can be typed by name
    pub fn focus_box(&mut self) {
        self.command_box.focus();
    }

    /// Hand focus back to the host, keeping any staged command
    ///
    /// A typed command name is dropped. A staged command keeps its input and
    /// takes focus again the next time its binding runs it.
    pub fn blur_box(&mut self) {
        if self.command_box.state() != BoxState::AwaitingInput {
            self.command_box.line_mut().clear();
        }
        self.command_box.blur();
    }

    /// Abandon the staged command or typed entry
    ///
    /// Returns false if there was nothing to cancel.
    pub fn cancel(&mut self) -> bool {
        if self.command_box.state() == BoxState::Idle && !self.command_box.has_focus() {
            return false;
        }
        if let Some(id) = self.command_box.current() {
            if let Some(command) = self.registry.get_mut(id) {
                tracing::debug!("Cancelled {}", command.name());
                command.reset();
            }
        }
        self.command_box.clear();
        true
    }

    /// The box contents as the host should draw them
    pub fn status_line(&mut self) -> Option<String> {
        if self.command_box.state() == BoxState::AwaitingInput {
            let step = self.command_box.step(&mut self.registry)?;
            return Some(format!("{}: {}", step.prompt(), step.input().text()));
        }
        if self.command_box.has_focus() {
            return Some(format!("> {}", self.command_box.line().text()));
        }
        None
    }

    fn command_label(&self, id: CommandId) -> &str {
        self.registry.name_of(id).unwrap_or("<unknown>")
    }
}

impl<C: Controller + std::fmt::Debug> std::fmt::Debug for Commander<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commander")
            .field("controller", &self.controller)
            .field("registry", &self.registry)
            .field("bindings", &self.bindings)
            .field("command_box", &self.command_box)
            .finish()
    }
}
