use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::ui::mvi::UiState;

/// Message shown after a rejected unlock attempt.
pub const WRONG_PASSWORD: &str = "Wrong password";

/// Longest accepted password, in bytes. The buffer is allocated at this size
/// once and never grows, so no unwiped copy is left behind by a realloc.
pub const PASSWORD_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Typing,
}

/// Password characters typed so far.
///
/// Append/pop-tail only. The backing memory is wiped when the buffer is
/// cleared or dropped, and the contents never show up in `Debug` output.
pub struct PasswordBuffer(Zeroizing<String>);

impl PasswordBuffer {
    pub fn new() -> Self {
        Self(Zeroizing::new(String::with_capacity(PASSWORD_CAPACITY)))
    }

    /// Append `ch`, or return `false` and leave the buffer untouched when it
    /// would not fit in the preallocated capacity.
    pub fn push(&mut self, ch: char) -> bool {
        if self.0.len() + ch.len_utf8() > PASSWORD_CAPACITY {
            return false;
        }
        self.0.push(ch);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.zeroize();
    }

    /// Number of characters, which is also the number of dots drawn.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expose the secret. Only the authenticator should call this.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for PasswordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PasswordBuffer {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.0.push_str(self.expose());
        copy
    }
}

impl PartialEq for PasswordBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for PasswordBuffer {}

impl fmt::Debug for PasswordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordBuffer(len={})", self.len())
    }
}

/// The single authoritative record of the unlock attempt in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub(super) password: PasswordBuffer,
    pub(super) mode: Mode,
    pub(super) last_error: Option<String>,
    pub(super) unlocked: bool,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn password(&self) -> &PasswordBuffer {
        &self.password
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}
