use agentcore_forwarder::{
    Result,
    config::{AgentConfig, ServerConfig},
    forwarder::Forwarder,
    server::{self, handlers::AppState},
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

use super::MockAgentInvoker;

pub const TEST_AGENT_ARN: &str =
    "arn:aws:bedrock-agentcore:us-east-1:123456789012:runtime/cx_agent-AbC123";

pub const ENCODED_TEST_AGENT_ARN: &str =
    "arn%3Aaws%3Abedrock-agentcore%3Aus-east-1%3A123456789012%3Aruntime%2Fcx_agent-AbC123";

/// A 36-character conversation id that passes through unchanged
pub const LONG_SESSION_ID: &str = "0b7d7c4e-1f0a-4c52-9a2e-6f1f3b2a9d10";

/// Agent config pointed at a local mock server
pub fn create_agent_config(endpoint: &str) -> AgentConfig {
    AgentConfig {
        agent_arn: Some(TEST_AGENT_ARN.to_string()),
        endpoint: Some(endpoint.to_string()),
        ..AgentConfig::default()
    }
}

/// Router backed by a mock invoker, with the default body limit
pub fn create_mock_app(invoker: MockAgentInvoker) -> Router {
    create_mock_app_with_limit(invoker, ServerConfig::default().max_body_bytes)
}

pub fn create_mock_app_with_limit(invoker: MockAgentInvoker, max_body_bytes: usize) -> Router {
    let forwarder = Forwarder::new(Arc::new(invoker), "x-access-token").unwrap();
    server::router(
        AppState {
            forwarder: Arc::new(forwarder),
        },
        max_body_bytes,
    )
}

/// Router backed by the real AgentCore client
pub fn create_app(config: &AgentConfig) -> Router {
    let forwarder = Forwarder::from_config(config).unwrap();
    server::router(
        AppState {
            forwarder: Arc::new(forwarder),
        },
        ServerConfig::default().max_body_bytes,
    )
}

pub fn post_request(body: impl Into<Body>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("x-access-token", token);
    }

    builder.body(body.into()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

agent:
  agent_arn: "arn:aws:bedrock-agentcore:us-east-1:123456789012:runtime/cx_agent-AbC123"
  region: "eu-central-1"
  header_name: "x-agent-token"
  timeout_seconds: 30
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
agent:
  timeout_seconds: -1
"#;
