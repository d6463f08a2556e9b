use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::key::KeyInput;

/// Translate a crossterm key event for the controller.
pub fn classify(key: &KeyEvent) -> KeyInput {
    if key.kind == KeyEventKind::Release {
        return KeyInput::Ignored;
    }

    match key.code {
        // Chords like Ctrl+C never reach the password.
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            KeyInput::Ignored
        }
        KeyCode::Char(ch) => KeyInput::from_char(ch),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Esc => KeyInput::Escape,
        KeyCode::Modifier(_) | KeyCode::CapsLock | KeyCode::NumLock | KeyCode::ScrollLock => {
            KeyInput::ModifierOnly
        }
        _ => KeyInput::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::ModifierKeyCode;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn shifted_characters_are_printable() {
        assert_eq!(
            classify(&press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyInput::PrintableChar('A')
        );
        assert_eq!(
            classify(&press(KeyCode::Char(' '), KeyModifiers::NONE)),
            KeyInput::PrintableChar(' ')
        );
    }

    #[test]
    fn control_chords_are_ignored() {
        assert_eq!(
            classify(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyInput::Ignored
        );
    }

    #[test]
    fn modifiers_and_navigation() {
        assert_eq!(
            classify(&press(
                KeyCode::Modifier(ModifierKeyCode::LeftShift),
                KeyModifiers::NONE
            )),
            KeyInput::ModifierOnly
        );
        assert_eq!(
            classify(&press(KeyCode::CapsLock, KeyModifiers::NONE)),
            KeyInput::ModifierOnly
        );
        assert_eq!(
            classify(&press(KeyCode::Left, KeyModifiers::NONE)),
            KeyInput::Ignored
        );
        assert_eq!(classify(&press(KeyCode::Esc, KeyModifiers::NONE)), KeyInput::Escape);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(classify(&event), KeyInput::Ignored);
    }
}
