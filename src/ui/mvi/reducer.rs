use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: (State, Intent) -> State.
///
/// Side effects (network calls, clipboard, logging) stay with the caller
/// that dispatches the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
