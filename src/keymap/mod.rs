//! Keyboard chords and the chord → command binding table
//!
//! This module provides:
//! - `KeyChord`: a key plus a modifier bitmask, the unit of key binding
//! - `BindingTable`: chord lookup with last-write-wins registration
//! - YAML keymap files naming commands by their registered name
//! - Layering of embedded defaults, project and user keymaps
//!
//! # Architecture
//!
//! ```text
//! host key event → KeyChord → BindingTable::resolve() → CommandId → Commander
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults
//! let bindings = load_default_keymap();
//!
//! // Or a single YAML file
//! let bindings = load_keymap_file(Path::new("keymap.yaml"))?;
//! ```

mod binding;
mod config;
mod defaults;
mod table;
mod types;
#[cfg(feature = "winit")]
mod winit_adapter;

pub use binding::{Keybinding, UNBOUND};
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, load_keymap, load_keymap_layers,
    merge_bindings,
};
pub use table::BindingTable;
pub use types::{KeyChord, KeyCode, Modifiers};
#[cfg(feature = "winit")]
pub use winit_adapter::{chord_from_winit, modifiers_from_winit};
