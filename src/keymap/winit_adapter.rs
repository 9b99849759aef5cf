//! Adapter from winit key events to KeyChord

use winit::keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

use super::types::{KeyChord, KeyCode, Modifiers};

/// Convert winit modifier state to our Modifiers
pub fn modifiers_from_winit(state: ModifiersState) -> Modifiers {
    Modifiers::new(
        state.control_key(),
        state.shift_key(),
        state.alt_key(),
        state.super_key(),
    )
}

/// Convert winit key event data to a KeyChord
///
/// Returns None if the key cannot be mapped (e.g., unknown or dead keys)
pub fn chord_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    modifiers: ModifiersState,
) -> Option<KeyChord> {
    let mods = modifiers_from_winit(modifiers);

    // Numpad Enter reports as a named Enter; the physical key disambiguates
    if physical_key == PhysicalKey::Code(WinitKeyCode::NumpadEnter) {
        return Some(KeyChord::new(KeyCode::NumpadEnter, mods));
    }

    let key = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => KeyCode::Enter,
            NamedKey::Escape => KeyCode::Escape,
            NamedKey::Tab => KeyCode::Tab,
            NamedKey::Backspace => KeyCode::Backspace,
            NamedKey::Delete => KeyCode::Delete,
            NamedKey::Space => KeyCode::Space,

            NamedKey::ArrowUp => KeyCode::Up,
            NamedKey::ArrowDown => KeyCode::Down,
            NamedKey::ArrowLeft => KeyCode::Left,
            NamedKey::ArrowRight => KeyCode::Right,

            NamedKey::Home => KeyCode::Home,
            NamedKey::End => KeyCode::End,
            NamedKey::PageUp => KeyCode::PageUp,
            NamedKey::PageDown => KeyCode::PageDown,
            NamedKey::Insert => KeyCode::Insert,

            NamedKey::F1 => KeyCode::F(1),
            NamedKey::F2 => KeyCode::F(2),
            NamedKey::F3 => KeyCode::F(3),
            NamedKey::F4 => KeyCode::F(4),
            NamedKey::F5 => KeyCode::F(5),
            NamedKey::F6 => KeyCode::F(6),
            NamedKey::F7 => KeyCode::F(7),
            NamedKey::F8 => KeyCode::F(8),
            NamedKey::F9 => KeyCode::F(9),
            NamedKey::F10 => KeyCode::F(10),
            NamedKey::F11 => KeyCode::F(11),
            NamedKey::F12 => KeyCode::F(12),

            _ => return None,
        },

        // Shifted characters arrive uppercased; normalize so Shift lives only in mods
        Key::Character(s) => KeyCode::Char(s.chars().next()?.to_ascii_lowercase()),

        _ => return None,
    };

    Some(KeyChord::new(key, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key() {
        let chord = chord_from_winit(
            &Key::Character("o".into()),
            PhysicalKey::Code(WinitKeyCode::KeyO),
            ModifiersState::CONTROL,
        );
        assert_eq!(
            chord,
            Some(KeyChord::new(KeyCode::Char('o'), Modifiers::CTRL))
        );
    }

    #[test]
    fn test_shifted_character_normalized() {
        let chord = chord_from_winit(
            &Key::Character("N".into()),
            PhysicalKey::Code(WinitKeyCode::KeyN),
            ModifiersState::CONTROL | ModifiersState::SHIFT,
        );
        assert_eq!(
            chord,
            Some(KeyChord::new(
                KeyCode::Char('n'),
                Modifiers::CTRL | Modifiers::SHIFT
            ))
        );
    }

    #[test]
    fn test_enter_variants() {
        let main = chord_from_winit(
            &Key::Named(NamedKey::Enter),
            PhysicalKey::Code(WinitKeyCode::Enter),
            ModifiersState::empty(),
        );
        assert_eq!(main, Some(KeyChord::key(KeyCode::Enter)));

        let numpad = chord_from_winit(
            &Key::Named(NamedKey::Enter),
            PhysicalKey::Code(WinitKeyCode::NumpadEnter),
            ModifiersState::empty(),
        );
        assert_eq!(numpad, Some(KeyChord::key(KeyCode::NumpadEnter)));
    }

    #[test]
    fn test_unmapped_key() {
        let chord = chord_from_winit(
            &Key::Named(NamedKey::CapsLock),
            PhysicalKey::Code(WinitKeyCode::CapsLock),
            ModifiersState::empty(),
        );
        assert_eq!(chord, None);
    }
}
