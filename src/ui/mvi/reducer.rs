//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// All form transitions (edits, focus moves, submit, cancel) happen here and
/// nowhere else: `(State, Intent) -> State`, no I/O, no clock reads.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consume the current state and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
