//! Marker trait for reducer-owned state.

/// Marker trait for state objects driven by a [`Reducer`](super::Reducer).
///
/// States are cloned rather than shared and compared to detect whether a
/// surface needs to be redrawn.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
