use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Session ids shorter than this are replaced with a fresh UUID.
pub const MIN_SESSION_ID_LEN: usize = 33;

/// Inbound body: `{"input": {"prompt": ..., "conversation_id": ...}}`.
///
/// Every field is optional. A missing `input` is an empty input, a missing
/// `prompt` is `""`, and a missing `conversation_id` gets a generated one.
/// An explicit `"prompt": null` is kept and forwarded as `null`; an explicit
/// `"conversation_id": null` is malformed.
#[derive(Debug, Default, Deserialize)]
pub struct InvocationBody {
    #[serde(default)]
    pub input: RequestInput,
}

#[derive(Debug, Deserialize)]
pub struct RequestInput {
    #[serde(default = "empty_prompt")]
    pub prompt: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub feedback: Option<Value>,
}

impl Default for RequestInput {
    fn default() -> Self {
        Self {
            prompt: empty_prompt(),
            conversation_id: None,
            user_id: None,
            feedback: None,
        }
    }
}

fn empty_prompt() -> Option<String> {
    Some(String::new())
}

/// Only runs when the key is present, so `null` is rejected like any other
/// non-string value.
fn present_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl InvocationBody {
    /// An empty body reads as `{}`. Anything else must be valid JSON.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_slice(bytes).map_err(Error::InvalidBody)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn resolve(candidate: Option<String>) -> Self {
        match candidate {
            Some(id) if id.chars().count() >= MIN_SESSION_ID_LEN => Self(id),
            _ => Self::generate(),
        }
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
