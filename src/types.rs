//! Wire types for the chat and export endpoints.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persona profile every demo chat turn runs under.
pub const DEFAULT_PROFILE: &str = "naga";

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The user's message.
    pub input: String,
    /// Persona profile name.
    pub profile: String,
    /// Only sent when a mock reply is wanted; never serialized as `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
}

impl ChatRequest {
    pub fn new(input: impl Into<String>, mock: bool) -> Self {
        Self {
            input: input.into(),
            profile: DEFAULT_PROFILE.to_string(),
            mock: mock.then_some(true),
        }
    }
}

/// Response from `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Conversation to export. `None` when the server did not return one.
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Everything else the server sent back.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatResponse {
    /// Decode a chat response body.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. The body must be a JSON
    /// object; a blank `conversation_id` is normalized to `None`.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(body);
        let value: Value = serde_json::from_str(&text)?;
        if !value.is_object() {
            return Err(Error::Protocol(format!(
                "expected a JSON object from /api/chat, got {}",
                json_kind(&value)
            )));
        }

        match value.get("conversation_id") {
            None | Some(Value::Null | Value::String(_)) => {}
            Some(other) => {
                return Err(Error::Protocol(format!(
                    "conversation_id must be a string, got {}",
                    json_kind(other)
                )));
            }
        }

        let mut response: ChatResponse = serde_json::from_value(value)?;
        if response.conversation_id.as_deref() == Some("") {
            response.conversation_id = None;
        }
        Ok(response)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
