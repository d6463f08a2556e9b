use iced::keyboard::key::Named;
use iced::keyboard::Key;

use crate::ui::key::KeyInput;

/// Classify an iced key press. `text` is what the press typed, if anything.
pub fn classify(key: &Key, text: Option<&str>) -> KeyInput {
    match key {
        Key::Named(Named::Enter) => KeyInput::Enter,
        Key::Named(Named::Backspace) => KeyInput::Backspace,
        Key::Named(Named::Escape) => KeyInput::Escape,
        Key::Named(Named::Space) => KeyInput::PrintableChar(' '),
        Key::Named(
            Named::Shift
            | Named::Control
            | Named::Alt
            | Named::AltGraph
            | Named::Super
            | Named::Meta
            | Named::CapsLock
            | Named::NumLock
            | Named::ScrollLock,
        ) => KeyInput::ModifierOnly,
        Key::Character(chars) => KeyInput::from_text(text.unwrap_or(chars.as_str())),
        _ => KeyInput::Ignored,
    }
}
