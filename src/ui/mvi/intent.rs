//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects: user actions and navigation events
/// that reducers turn into new states.
pub trait Intent: Send + 'static {}
