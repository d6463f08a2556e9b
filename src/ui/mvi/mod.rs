//! Model-View-Intent primitives for the lock screen.
//!
//! ```text
//! KeyInput ──→ Intent ──→ Reducer ──→ State ──→ ViewDirective ──→ Surfaces
//!                 ↑                                                  │
//!                 └──────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: the session record every surface is a projection of
//! - **Intent**: classified key presses and authentication outcomes
//! - **Reducer**: pure `(State, Intent) -> State` transition function

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
