//! Translation of key events into board intents.

use crate::ui::app::{App, Focus};
use crate::ui::board::{BoardIntent, BoardState};
use crate::ui::theme::REACT_BLUE_TAG;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_focus();
        return;
    }

    if let Some(intent) = key_to_intent(app.board(), app.focus(), key) {
        app.dispatch(intent);
    }
}

/// Map a key press to an intent. `None` means the key does nothing.
///
/// Text edits carry the whole new field value, like a change event.
pub fn key_to_intent(state: &BoardState, focus: Focus, key: KeyEvent) -> Option<BoardIntent> {
    if is_ctrl_char(key, 't') {
        return Some(BoardIntent::SetDarkMode {
            enabled: !state.dark_mode,
        });
    }
    if is_ctrl_char(key, 'b') {
        return Some(BoardIntent::SetColor {
            color: REACT_BLUE_TAG.to_string(),
        });
    }
    if is_ctrl_char(key, 'n') {
        return Some(BoardIntent::SetColor {
            color: String::new(),
        });
    }

    match focus {
        Focus::Input => input_key(state, key),
        Focus::Counter => counter_key(key),
    }
}

fn input_key(state: &BoardState, key: KeyEvent) -> Option<BoardIntent> {
    if is_ctrl_char(key, 'u') {
        return Some(BoardIntent::SetInput {
            text: String::new(),
        });
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => {
            let mut text = state.input.clone();
            text.push(ch);
            Some(BoardIntent::SetInput { text })
        }
        KeyCode::Backspace => {
            let mut text = state.input.clone();
            text.pop()?;
            Some(BoardIntent::SetInput { text })
        }
        _ => None,
    }
}

fn counter_key(key: KeyEvent) -> Option<BoardIntent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => Some(BoardIntent::Increment),
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => Some(BoardIntent::Decrement),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
