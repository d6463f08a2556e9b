//! Toolkit-neutral key classification.
//!
//! Both frontends translate their native key events into [`KeyInput`]
//! before handing them to the controller, so the session state machine
//! never sees toolkit types.

/// A key press as the lock session understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A visible ASCII character (0x20..=0x7E), including space.
    PrintableChar(char),
    Backspace,
    Enter,
    Escape,
    /// Shift, Control, Alt, Super and the lock keys. Consumed silently.
    ModifierOnly,
    /// Anything else: arrows, function keys, non-ASCII text.
    Ignored,
}

impl KeyInput {
    /// Classify a character produced by a key press.
    pub fn from_char(ch: char) -> Self {
        if (' '..='~').contains(&ch) {
            KeyInput::PrintableChar(ch)
        } else {
            KeyInput::Ignored
        }
    }

    /// Classify the text a key press produced. Only single characters count.
    pub fn from_text(text: &str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => KeyInput::Ignored,
        }
    }

    pub fn is_consumed_silently(self) -> bool {
        matches!(self, KeyInput::ModifierOnly | KeyInput::Ignored)
    }
}
