use crate::config::ViewConfig;
use crate::ui::board::{BoardIntent, BoardReducer, BoardState};
use crate::ui::mvi::Reducer;
use crate::ui::view::BoardView;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Input,
    Counter,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of the board snapshot for the lifetime of the UI.
pub struct App {
    should_quit: bool,
    focus: Focus,
    board: BoardState,
    /// Bumped whenever a dispatch changes the board.
    revision: u64,
    view_config: ViewConfig,
}

impl App {
    pub fn new(initial: BoardState, view_config: ViewConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            board: initial,
            revision: 0,
            view_config,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_state(&self.board, &self.view_config)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Counter,
            Focus::Counter => Focus::Input,
        };
    }

    /// Run `intent` through the reducer and install the result.
    pub fn dispatch(&mut self, intent: BoardIntent) {
        let previous = self.board.clone();
        tracing::debug!(kind = intent.kind(), "dispatch");
        dispatch_mvi!(self, board, BoardReducer, intent);
        if self.board != previous {
            self.revision += 1;
        }
    }

    /// Append pasted text to the input field.
    pub fn on_paste(&mut self, text: &str) {
        if self.focus != Focus::Input {
            return;
        }
        let mut value = self.board.input.clone();
        value.push_str(text);
        self.dispatch(BoardIntent::SetInput { text: value });
    }
}
