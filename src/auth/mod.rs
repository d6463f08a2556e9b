//! Password verification.
//!
//! The controller only sees the [`Authenticator`] trait. At startup
//! [`select`] tries to load libpam and falls back to a privileged helper
//! command when the library cannot be loaded.

mod command;
mod pam;
mod user;

use thiserror::Error;

use crate::config::{AuthBackend, AuthConfig};

pub use command::CommandAuthenticator;
pub use pam::PamAuthenticator;
pub use user::current_username;

/// Checks a user's password.
///
/// Implementations never fail loudly: anything that prevents a positive
/// answer is a denial.
pub trait Authenticator: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn authenticate(&self, user: &str, secret: &str) -> bool;
}

/// Errors that make an authentication mechanism unavailable.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to load PAM library: {reason}")]
    LibraryUnavailable { reason: String },

    #[error("PAM library is missing symbol '{symbol}'")]
    SymbolMissing { symbol: &'static str },

    #[error("Invalid PAM service name '{service}'")]
    InvalidService { service: String },
}

/// Pick the authenticator for this run.
pub fn select(config: &AuthConfig) -> Box<dyn Authenticator> {
    if config.backend == AuthBackend::Auto {
        match PamAuthenticator::load(&config.pam_service) {
            Ok(pam) => {
                tracing::info!(service = %config.pam_service, "Using PAM authentication");
                return Box::new(pam);
            }
            Err(err) => {
                tracing::warn!("{}; falling back to helper command", err);
            }
        }
    }

    tracing::info!(command = ?config.command, "Using helper command authentication");
    Box::new(CommandAuthenticator::new(config.command.clone()))
}
