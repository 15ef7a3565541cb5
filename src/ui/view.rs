//! Maps a board snapshot to display text and colors.
//!
//! Trimming and placeholders live here, never in the reducer.

use crate::config::ViewConfig;
use crate::ui::board::BoardState;
use crate::ui::theme::{color_label, Palette};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub echo: String,
    pub count: String,
    pub color_label: String,
    pub dark_mode: bool,
    pub palette: Palette,
}

impl BoardView {
    pub fn from_state(state: &BoardState, config: &ViewConfig) -> Self {
        let trimmed = state.input.trim();
        let echo = if trimmed.is_empty() {
            config.input_placeholder.clone()
        } else {
            trimmed.to_string()
        };

        let count = if state.count == 0 && !config.count_placeholder.is_empty() {
            config.count_placeholder.clone()
        } else {
            state.count.to_string()
        };

        Self {
            echo,
            count,
            color_label: color_label(&state.color).to_string(),
            dark_mode: state.dark_mode,
            palette: Palette::resolve(&state.color, state.dark_mode),
        }
    }
}
