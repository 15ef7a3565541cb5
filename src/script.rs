//! Headless replay of action scripts.
//!
//! A script is JSON lines, one raw action per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! {"type": "increment"}
//! {"type": "setInput", "payload": "hello"}
//! {"type": "setDarkMode", "payload": false}
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::board::{ActionError, BoardIntent, BoardReducer, BoardState, RawAction};
use crate::ui::mvi::Reducer;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {source}")]
    Action {
        line: usize,
        #[source]
        source: ActionError,
    },

    #[error("Line {line}: unrecognized action '{kind}'")]
    UnrecognizedAction { line: usize, kind: String },
}

/// How unrecognized action kinds are treated during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayMode {
    /// Hand them to the reducer, which leaves the state unchanged.
    #[default]
    Permissive,
    /// Stop at the first one.
    Strict,
}

impl ReplayMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ReplayMode::Strict
        } else {
            ReplayMode::Permissive
        }
    }
}

/// A decoded action and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub intent: BoardIntent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub state: BoardState,
    pub applied: usize,
    pub skipped: usize,
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let content = fs::read_to_string(path).map_err(|e| ScriptError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_script(&content)
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let intent = RawAction::parse(trimmed)
            .and_then(RawAction::into_intent)
            .map_err(|source| ScriptError::Action { line, source })?;
        steps.push(ScriptStep { line, intent });
    }
    Ok(steps)
}

/// Fold `steps` through [`BoardReducer`] starting at `initial`.
pub fn replay(
    initial: BoardState,
    steps: Vec<ScriptStep>,
    mode: ReplayMode,
) -> Result<ReplayOutcome, ScriptError> {
    let mut state = initial;
    let mut applied = 0;
    let mut skipped = 0;

    for ScriptStep { line, intent } in steps {
        if intent.is_recognized() {
            applied += 1;
        } else {
            if mode == ReplayMode::Strict {
                return Err(ScriptError::UnrecognizedAction {
                    line,
                    kind: intent.kind().to_string(),
                });
            }
            skipped += 1;
        }
        state = BoardReducer::reduce(state, intent);
    }

    tracing::info!(applied, skipped, "replay finished");
    Ok(ReplayOutcome {
        state,
        applied,
        skipped,
    })
}
