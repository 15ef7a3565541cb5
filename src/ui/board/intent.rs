use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardIntent {
    Increment,
    Decrement,
    /// Replace the input with the full field value.
    SetInput { text: String },
    SetColor { color: String },
    SetDarkMode { enabled: bool },
    /// A decoded action whose kind the board does not handle.
    /// Reduces to the identity transition.
    Unrecognized { kind: String },
}

impl Intent for BoardIntent {}

impl BoardIntent {
    /// Kind name as it appears in raw actions.
    pub fn kind(&self) -> &str {
        match self {
            BoardIntent::Increment => "increment",
            BoardIntent::Decrement => "decrement",
            BoardIntent::SetInput { .. } => "setInput",
            BoardIntent::SetColor { .. } => "setColor",
            BoardIntent::SetDarkMode { .. } => "setDarkMode",
            BoardIntent::Unrecognized { kind } => kind,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, BoardIntent::Unrecognized { .. })
    }
}
