//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned into new states, carry everything the view needs,
/// and compare with `PartialEq` so the store can skip no-op updates.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
