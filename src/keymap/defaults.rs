//! Default keybindings and keymap layering
//!
//! The shipped keymap is embedded from keymap.yaml at the project root, with a
//! hardcoded fallback in case it fails to parse.

use std::path::{Path, PathBuf};

use super::binding::Keybinding;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyChord, KeyCode, Modifiers};
use crate::command::{ADD_PROJECT, OPEN_FILE};
use crate::config::CommanderConfig;

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded keymap YAML, for tooling that wants to show or copy it
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (skipped when `config.default_bindings` is false)
/// 2. keymap.yaml in the current directory
/// 3. User keymap at ~/.config/commander/keymap.yaml
/// 4. The file named by `config.keymap`, if any
pub fn load_keymap(config: &CommanderConfig) -> Vec<Keybinding> {
    let mut layers = vec![PathBuf::from("keymap.yaml")];
    if let Some(user_path) = crate::config_paths::keymap_file() {
        layers.push(user_path);
    }
    load_keymap_layers(config, &layers)
}

/// Load keymaps with explicit optional layers between the defaults and
/// `config.keymap`
///
/// Missing layer files are skipped silently; a missing `config.keymap` is
/// logged.
pub fn load_keymap_layers(config: &CommanderConfig, layers: &[PathBuf]) -> Vec<Keybinding> {
    let mut bindings = if config.default_bindings {
        load_embedded_keymap()
    } else {
        tracing::info!("Default keybindings disabled by config");
        Vec::new()
    };

    for layer in layers {
        bindings = merge_layer(bindings, layer, false);
    }

    if let Some(ref extra) = config.keymap {
        bindings = merge_layer(bindings, extra, true);
    }

    bindings
}

/// Embedded defaults only
pub fn load_default_keymap() -> Vec<Keybinding> {
    load_embedded_keymap()
}

fn load_embedded_keymap() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Merge the keymap at `path` over `base`; a missing file is only reported
/// when `required` is set
fn merge_layer(base: Vec<Keybinding>, path: &Path, required: bool) -> Vec<Keybinding> {
    if !path.exists() {
        if required {
            tracing::warn!("Keymap file {} does not exist", path.display());
        }
        return base;
    }

    match load_keymap_file(path) {
        Ok(layer) => {
            tracing::info!(
                "Merging keymap from {} ({} bindings)",
                path.display(),
                layer.len()
            );
            merge_bindings(base, layer)
        }
        Err(e) => {
            tracing::warn!("Failed to load keymap from {}: {}", path.display(), e);
            base
        }
    }
}

/// Merge user bindings into base bindings
///
/// - A user binding for a chord already in base replaces it
/// - A user binding with command `Unbound` removes the chord
/// - Otherwise the user binding is appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.is_unbind() {
            result.retain(|b| b.chord != user_binding.chord);
            continue;
        }

        match result.iter().position(|b| b.chord == user_binding.chord) {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default keybindings
///
/// Both the Ctrl and the Super variants are bound so the defaults work the
/// same way on every platform.
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL;
    let sup = Modifiers::SUPER;
    let shift = Modifiers::SHIFT;

    vec![
        bind(KeyCode::Char('o'), ctrl, OPEN_FILE),
        bind(KeyCode::Char('o'), sup, OPEN_FILE),
        bind(KeyCode::Char('n'), ctrl | shift, ADD_PROJECT),
        bind(KeyCode::Char('n'), sup | shift, ADD_PROJECT),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: &str) -> Keybinding {
    Keybinding::new(KeyChord::new(key, mods), command)
}
