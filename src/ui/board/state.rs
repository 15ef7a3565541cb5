use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// Snapshot of the board at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Unbounded counter, negative values allowed.
    pub count: i64,
    /// Raw text as typed. Trimming is a display concern.
    pub input: String,
    /// Free-form color tag. Empty means the default style.
    pub color: String,
    pub dark_mode: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            count: 0,
            input: String::new(),
            color: String::new(),
            dark_mode: true,
        }
    }
}

impl UiState for BoardState {}
