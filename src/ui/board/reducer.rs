//! Reducer for the board.

use crate::ui::mvi::Reducer;

use super::intent::BoardIntent;
use super::state::BoardState;

/// Pure transitions for [`BoardState`].
///
/// The only observable effect besides the returned state is a warning for
/// unrecognized kinds.
pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoardIntent::Increment => BoardState {
                count: state.count.wrapping_add(1),
                ..state
            },
            BoardIntent::Decrement => BoardState {
                count: state.count.wrapping_sub(1),
                ..state
            },
            BoardIntent::SetInput { text } => BoardState {
                input: text,
                ..state
            },
            BoardIntent::SetColor { color } => BoardState { color, ..state },
            BoardIntent::SetDarkMode { enabled } => BoardState {
                dark_mode: enabled,
                ..state
            },
            BoardIntent::Unrecognized { kind } => {
                tracing::warn!(kind = %kind, "unhandled action kind, state unchanged");
                state
            }
        }
    }
}
