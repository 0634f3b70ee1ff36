//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent key presses already mapped to form actions
/// (edit a field, move focus, submit, cancel) and are processed by
/// reducers to produce new states.
pub trait Intent: Send + 'static {}
