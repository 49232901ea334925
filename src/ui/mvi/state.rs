//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value is immutable (transitions clone into a new value),
/// self-contained (everything the view needs to draw), and comparable so
/// that transitions can be detected.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
