//! Raw, dynamically typed actions.
//!
//! Scripts describe actions as `{"type": "...", "payload": ...}`. Decoding
//! checks the payload shape per kind and maps unknown kinds to
//! [`BoardIntent::Unrecognized`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::intent::BoardIntent;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Malformed action: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Action '{kind}' expects a {expected} payload")]
    InvalidPayload {
        kind: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Parse a single JSON object.
    pub fn parse(text: &str) -> Result<Self, ActionError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode into a typed intent.
    ///
    /// Payloads of no-payload kinds are ignored.
    pub fn into_intent(self) -> Result<BoardIntent, ActionError> {
        let RawAction { kind, payload } = self;
        match kind.as_str() {
            "increment" => Ok(BoardIntent::Increment),
            "decrement" => Ok(BoardIntent::Decrement),
            "input" | "setInput" => {
                let text = string_payload(&kind, payload)?;
                Ok(BoardIntent::SetInput { text })
            }
            "changeColor" | "setColor" => {
                let color = string_payload(&kind, payload)?;
                Ok(BoardIntent::SetColor { color })
            }
            "setDarkMode" => match payload {
                Some(Value::Bool(enabled)) => Ok(BoardIntent::SetDarkMode { enabled }),
                _ => Err(ActionError::InvalidPayload {
                    kind,
                    expected: "boolean",
                }),
            },
            _ => Ok(BoardIntent::Unrecognized { kind }),
        }
    }
}

impl TryFrom<RawAction> for BoardIntent {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        raw.into_intent()
    }
}

fn string_payload(kind: &str, payload: Option<Value>) -> Result<String, ActionError> {
    match payload {
        Some(Value::String(text)) => Ok(text),
        _ => Err(ActionError::InvalidPayload {
            kind: kind.to_string(),
            expected: "string",
        }),
    }
}
