//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding entries:
//!
//! ```yaml
//! bindings:
//!   - key: "ctrl+o"
//!     command: OpenFile
//!   - key: "super+o"
//!     command: OpenFile
//!     platform: macos
//! ```

use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::types::{KeyChord, KeyCode, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Errors that can occur when loading keymaps or binding commands
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::Io(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from a YAML string, dropping entries for other platforms
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::Parse(e.to_string()))?;

    let current_platform = current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        if let Some(ref platform) = entry.platform {
            if !platform.eq_ignore_ascii_case(current_platform) {
                continue;
            }
        }

        let command = entry.command.trim();
        if command.is_empty() {
            return Err(KeymapError::UnknownCommand(format!(
                "empty command for key {}",
                entry.key
            )));
        }

        let chord = parse_key_string(&entry.key)?;
        bindings.push(Keybinding::new(chord, command));
    }

    Ok(bindings)
}

/// Parse a key string like "ctrl+shift+n" into a KeyChord
///
/// `cmd` is the platform command modifier (Super on macOS, Ctrl elsewhere).
pub fn parse_key_string(key_str: &str) -> Result<KeyChord, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+') {
        let part = part.trim().to_lowercase();
        match part.as_str() {
            "cmd" => mods = mods | Modifiers::cmd(),
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "super" | "meta" | "win" => mods = mods | Modifiers::SUPER,
            "" => {
                return Err(KeymapError::InvalidKey(format!(
                    "Empty segment in binding: {}",
                    key_str
                )))
            }
            _ => {
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(&part)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(KeyChord::new(key, mods))
}

/// Parse a lowercase key name
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),
        "insert" | "ins" => Ok(KeyCode::Insert),

        "numpad_enter" | "numenter" => Ok(KeyCode::NumpadEnter),

        _ => parse_function_key(key)
            .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// "f1" through "f24"
fn parse_function_key(key: &str) -> Option<KeyCode> {
    let n: u8 = key.strip_prefix('f')?.parse().ok()?;
    (1..=24).contains(&n).then_some(KeyCode::F(n))
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}
