//! Commander - keyboard command dispatch for an editor shell
//!
//! Key presses are resolved against a binding table. Commands either run
//! immediately or are staged in a one-line command box until their input is
//! complete, then executed against a host-supplied controller.

pub mod cli;
pub mod command;
pub mod command_box;
pub mod commander;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod keymap;
pub mod logging;
pub mod util;
pub mod workspace;

// Re-export commonly used types
pub use command::{Command, CommandId, CommandRegistry, Completer, InputStep};
pub use command_box::{BoxState, CommandBox};
pub use commander::Commander;
pub use config::CommanderConfig;
pub use controller::{Controller, Editor, Navigator, Project};
pub use keymap::{BindingTable, KeyChord, KeyCode, Keybinding, Modifiers};
pub use workspace::Workspace;
