//! Marker trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (a classified key press) or the
/// outcome of a side effect the controller ran on the user's behalf
/// (an authentication verdict). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
