//! Shared test utilities and mock collaborators.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use custom_lock::auth::Authenticator;
use custom_lock::controller::LockController;
use custom_lock::shutdown::ShutdownCoordinator;
use custom_lock::ui::key::KeyInput;
use custom_lock::wm::WindowManager;

/// Authenticator that accepts exactly one password and records every call.
#[derive(Clone)]
pub struct MockAuthenticator {
    accepted: String,
    pub attempts: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAuthenticator {
    pub fn accepting(password: &str) -> Self {
        Self {
            accepted: password.to_string(),
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.attempts.lock().len()
    }
}

impl Authenticator for MockAuthenticator {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn authenticate(&self, user: &str, secret: &str) -> bool {
        self.attempts
            .lock()
            .push((user.to_string(), secret.to_string()));
        secret == self.accepted
    }
}

/// Window manager that counts enter/leave requests.
#[derive(Clone, Default)]
pub struct MockWindowManager {
    pub entered: Arc<AtomicUsize>,
    pub left: Arc<AtomicUsize>,
}

impl MockWindowManager {
    pub fn entered(&self) -> usize {
        self.entered.load(Ordering::SeqCst)
    }

    pub fn left(&self) -> usize {
        self.left.load(Ordering::SeqCst)
    }
}

impl WindowManager for MockWindowManager {
    fn enter_exclusive_input_mode(&self) {
        self.entered.fetch_add(1, Ordering::SeqCst);
    }

    fn leave_exclusive_input_mode(&self) {
        self.left.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub controller: LockController,
    pub auth: MockAuthenticator,
    pub wm: MockWindowManager,
    pub coordinator: ShutdownCoordinator,
}

/// Controller for user "alice" whose password is `password`.
pub fn make_controller(password: &str) -> Harness {
    let auth = MockAuthenticator::accepting(password);
    let wm = MockWindowManager::default();
    let coordinator = ShutdownCoordinator::new();
    let controller = LockController::new(
        "alice".to_string(),
        Box::new(auth.clone()),
        Box::new(wm.clone()),
        coordinator.handle(),
    );
    Harness {
        controller,
        auth,
        wm,
        coordinator,
    }
}

/// Feed each character of `text` as a printable key press.
pub fn type_text(controller: &mut LockController, text: &str) {
    for ch in text.chars() {
        controller.handle_key(KeyInput::PrintableChar(ch));
    }
}
