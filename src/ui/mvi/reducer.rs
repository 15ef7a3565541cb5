//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current snapshot and return the next one.
    ///
    /// Must be deterministic and must not fail. Intents that do not apply
    /// return the state unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
