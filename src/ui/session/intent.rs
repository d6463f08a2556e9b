use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIntent {
    /// A printable character was typed.
    Append(char),
    /// Drop the last typed character. No-op on an empty buffer.
    Backspace,
    /// Escape: wipe the buffer and any pending error.
    Cancel,
    /// The authenticator rejected the submitted buffer.
    AuthFailed,
    /// The authenticator accepted the submitted buffer. Terminal.
    AuthSucceeded,
}

impl Intent for SessionIntent {}
