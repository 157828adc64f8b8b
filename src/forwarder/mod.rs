mod types;

pub use types::*;

use crate::{
    Error, Result,
    agentcore::{AgentCoreClient, AgentInvoker, Invocation},
    config::AgentConfig,
};
use axum::{
    body::Bytes,
    http::{
        HeaderMap, HeaderName, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const MISSING_TOKEN_MESSAGE: &str = "Missing X-Access-Token header";

/// What a forwarded request ends in, short of an unexpected failure.
#[derive(Debug)]
enum Reply {
    Unauthorized,
    Agent(Value),
}

/// Turns one inbound HTTP request into one AgentCore invocation.
pub struct Forwarder {
    invoker: Arc<dyn AgentInvoker>,
    header_name: HeaderName,
}

impl Forwarder {
    pub fn new(invoker: Arc<dyn AgentInvoker>, header_name: &str) -> Result<Self> {
        let header_name = HeaderName::try_from(header_name)
            .map_err(|e| Error::config(format!("Invalid header name '{}': {}", header_name, e)))?;

        Ok(Self {
            invoker,
            header_name,
        })
    }

    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        let client = AgentCoreClient::new(config.clone())?;
        Self::new(Arc::new(client), &config.header_name)
    }

    /// `body` is `Err` when the request body could not be read (for example,
    /// it exceeded the configured limit); that still lands on the 500 path.
    pub async fn handle(&self, method: &Method, headers: &HeaderMap, body: Result<Bytes>) -> Response {
        if *method == Method::OPTIONS {
            return preflight();
        }

        match self.forward(headers, body).await {
            Ok(Reply::Agent(value)) => {
                (StatusCode::OK, [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")], Json(value)).into_response()
            }
            Ok(Reply::Unauthorized) => {
                warn!("Rejecting request without {} header", self.header_name);
                error_response(StatusCode::UNAUTHORIZED, MISSING_TOKEN_MESSAGE)
            }
            Err(e) => {
                error!("Failed to forward request: {}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }

    async fn forward(&self, headers: &HeaderMap, body: Result<Bytes>) -> Result<Reply> {
        let InvocationBody { input } = InvocationBody::parse(&body?)?;
        let session_id = SessionId::resolve(input.conversation_id);

        let Some(token) = self.access_token(headers)? else {
            return Ok(Reply::Unauthorized);
        };

        info!("Forwarding prompt for session: {}", session_id);

        let invocation = Invocation {
            prompt: input.prompt,
            token,
            session_id: session_id.into_string(),
            user_id: input.user_id,
            feedback: input.feedback,
        };

        let outcome = self.invoker.invoke(invocation).await?;
        Ok(Reply::Agent(outcome.into_payload()))
    }

    fn access_token(&self, headers: &HeaderMap) -> Result<Option<String>> {
        let Some(value) = headers.get(&self.header_name) else {
            return Ok(None);
        };

        let token = value
            .to_str()
            .map_err(|e| Error::invalid_header(self.header_name.as_str(), e.to_string()))?;

        Ok(Some(token)
            .filter(|token| !token.is_empty())
            .map(str::to_string))
    }
}

fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"),
        ],
    )
        .into_response()
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}
