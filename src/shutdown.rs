//! Session termination.
//!
//! A successful unlock is the only way the lock screen ends. The controller
//! fires the signal; the frontend that owns the event loop watches it and
//! walks the exit phases.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShutdownPhase {
    Locked = 0,
    Unlocked = 1,
    ReleasingInput = 2,
    ClosingSurfaces = 3,
    Complete = 4,
}

pub struct ShutdownCoordinator {
    signaled: Arc<AtomicBool>,
    phase: Arc<AtomicU8>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            signaled: Arc::new(AtomicBool::new(false)),
            phase: Arc::new(AtomicU8::new(ShutdownPhase::Locked as u8)),
        }
    }

    /// Whether the unlock signal has fired.
    pub fn is_shutting_down(&self) -> bool {
        self.signaled.load(Ordering::SeqCst)
    }

    pub fn phase(&self) -> ShutdownPhase {
        phase_from_u8(self.phase.load(Ordering::SeqCst))
    }

    pub fn advance(&self, phase: ShutdownPhase) {
        self.phase.store(phase as u8, Ordering::SeqCst);
        tracing::debug!(?phase, "shutdown phase");
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            signaled: Arc::clone(&self.signaled),
            phase: Arc::clone(&self.phase),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle used to fire or observe the unlock signal.
#[derive(Clone)]
pub struct ShutdownHandle {
    signaled: Arc<AtomicBool>,
    phase: Arc<AtomicU8>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.signaled.load(Ordering::SeqCst)
    }

    /// Fire the unlock signal. Returns `true` only for the call that fired it.
    pub fn signal(&self) -> bool {
        let first = !self.signaled.swap(true, Ordering::SeqCst);
        if first {
            self.phase
                .store(ShutdownPhase::Unlocked as u8, Ordering::SeqCst);
            tracing::info!("Session unlocked, shutting down");
        }
        first
    }

    pub fn advance(&self, phase: ShutdownPhase) {
        self.phase.store(phase as u8, Ordering::SeqCst);
        tracing::debug!(?phase, "shutdown phase");
    }
}

fn phase_from_u8(value: u8) -> ShutdownPhase {
    match value {
        0 => ShutdownPhase::Locked,
        1 => ShutdownPhase::Unlocked,
        2 => ShutdownPhase::ReleasingInput,
        3 => ShutdownPhase::ClosingSurfaces,
        _ => ShutdownPhase::Complete,
    }
}
