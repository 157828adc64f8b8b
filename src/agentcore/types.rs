use serde::Serialize;
use serde_json::{Value, json};

pub const SESSION_ID_HEADER: &str = "X-Amzn-Bedrock-AgentCore-Runtime-Session-Id";

/// Outbound body: `{"input": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationPayload {
    pub input: InvocationInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationInput {
    /// `null` when the caller sent `"prompt": null`.
    pub prompt: Option<String>,
    pub conversation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Forwarded as-is; the agent owns its shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Value>,
}

/// Everything the invoker needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub prompt: Option<String>,
    pub token: String,
    pub session_id: String,
    pub user_id: Option<String>,
    pub feedback: Option<Value>,
}

impl Invocation {
    pub fn new(
        prompt: impl Into<String>,
        token: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            prompt: Some(prompt.into()),
            token: token.into(),
            session_id: session_id.into(),
            user_id: None,
            feedback: None,
        }
    }

    pub fn payload(&self) -> InvocationPayload {
        InvocationPayload {
            input: InvocationInput {
                prompt: self.prompt.clone(),
                conversation_id: self.session_id.clone(),
                user_id: self.user_id.clone(),
                feedback: self.feedback.clone(),
            },
        }
    }
}

/// Result of a call that reached AgentCore and got an HTTP answer.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    /// HTTP 200 with its decoded JSON body.
    Completed(Value),
    /// Any other status, with the raw response text.
    Rejected { status: u16, body: String },
}

impl AgentOutcome {
    pub fn into_payload(self) -> Value {
        match self {
            Self::Completed(value) => value,
            Self::Rejected { status, body } => json!({
                "error": format!("AgentCore returned {}: {}", status, body)
            }),
        }
    }
}
