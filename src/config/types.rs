use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    /// Larger request bodies are refused on the 500 path.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Settings for the AgentCore runtime that requests are forwarded to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Runtime ARN. Optional at startup; an invocation without it fails.
    #[serde(default)]
    pub agent_arn: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
    /// Inbound header carrying the caller's bearer token.
    #[serde(default = "default_header_name")]
    pub header_name: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Overrides the regional `https://bedrock-agentcore.<region>.amazonaws.com` base.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl AgentConfig {
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) if !endpoint.is_empty() => endpoint.trim_end_matches('/').to_string(),
            _ => format!("https://bedrock-agentcore.{}.amazonaws.com", self.region),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_arn: None,
            region: default_region(),
            header_name: default_header_name(),
            timeout_seconds: default_timeout_seconds(),
            endpoint: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    6 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_header_name() -> String {
    "x-access-token".to_string()
}

fn default_timeout_seconds() -> u64 {
    61
}
