//! Lock session controller.
//!
//! Owns the [`SessionState`], turns classified key presses into session
//! intents, runs the authentication side effect, and tells the
//! presentation layer what to show next.

use crate::auth::{self, Authenticator};
use crate::config::Config;
use crate::shutdown::{ShutdownHandle, ShutdownPhase};
use crate::ui::key::KeyInput;
use crate::ui::mvi::Reducer;
use crate::ui::session::{SessionIntent, SessionReducer, SessionState, ViewDirective};
use crate::wm::{CommandWindowManager, WindowManager};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// What the presentation layer should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing visible changed.
    Unchanged,
    /// Apply this directive to every surface.
    Render(ViewDirective),
    /// Authentication succeeded; tear down the surfaces and exit.
    Unlocked,
}

pub struct LockController {
    session: SessionState,
    user: String,
    authenticator: Box<dyn Authenticator>,
    window_manager: Box<dyn WindowManager>,
    shutdown: ShutdownHandle,
    input_released: bool,
}

impl LockController {
    /// Create the controller and grab exclusive input from the window manager.
    pub fn new(
        user: String,
        authenticator: Box<dyn Authenticator>,
        window_manager: Box<dyn WindowManager>,
        shutdown: ShutdownHandle,
    ) -> Self {
        window_manager.enter_exclusive_input_mode();
        tracing::info!(%user, authenticator = authenticator.name(), "Lock session started");
        Self {
            session: SessionState::default(),
            user,
            authenticator,
            window_manager,
            shutdown,
            input_released: false,
        }
    }

    /// Build a controller for the invoking user from loaded configuration.
    pub fn from_config(config: &Config, shutdown: ShutdownHandle) -> Self {
        Self::new(
            auth::current_username(),
            auth::select(&config.auth),
            Box::new(CommandWindowManager::from_config(&config.window_manager)),
            shutdown,
        )
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn directive(&self) -> ViewDirective {
        ViewDirective::from(&self.session)
    }

    pub fn handle_key(&mut self, key: KeyInput) -> Response {
        if self.session.is_unlocked() || key.is_consumed_silently() {
            return Response::Unchanged;
        }

        let intent = match key {
            KeyInput::PrintableChar(ch) => SessionIntent::Append(ch),
            KeyInput::Backspace if self.session.password().is_empty() => {
                return Response::Unchanged;
            }
            KeyInput::Backspace => SessionIntent::Backspace,
            KeyInput::Escape => SessionIntent::Cancel,
            KeyInput::Enter if self.session.password().is_empty() => {
                return Response::Unchanged;
            }
            KeyInput::Enter => return self.submit(),
            KeyInput::ModifierOnly | KeyInput::Ignored => return Response::Unchanged,
        };

        dispatch_mvi!(self, session, SessionReducer, intent);
        Response::Render(self.directive())
    }

    fn submit(&mut self) -> Response {
        let attempt_len = self.session.password().len();
        let granted = self
            .authenticator
            .authenticate(&self.user, self.session.password().expose());

        if granted {
            dispatch_mvi!(self, session, SessionReducer, SessionIntent::AuthSucceeded);
            if self.shutdown.signal() {
                self.shutdown.advance(ShutdownPhase::ReleasingInput);
                self.release_input();
            }
            return Response::Unlocked;
        }

        tracing::info!(
            authenticator = self.authenticator.name(),
            attempt_len,
            "Authentication denied"
        );
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::AuthFailed);
        Response::Render(self.directive())
    }

    fn release_input(&mut self) {
        if !self.input_released {
            self.input_released = true;
            self.window_manager.leave_exclusive_input_mode();
        }
    }
}

impl Drop for LockController {
    // A frontend that fails before unlocking must not leave the compositor
    // stuck in the lock submap.
    fn drop(&mut self) {
        if !self.input_released {
            tracing::warn!("Lock session ended without unlock, releasing input");
            self.release_input();
        }
    }
}
