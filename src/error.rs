use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end a lock session early.
#[derive(Debug, Error)]
pub enum LockError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal input closed before the session was unlocked")]
    InputClosed,

    #[error("Overlay failed: {reason}")]
    Overlay { reason: String },
}
