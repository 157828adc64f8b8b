use super::types::*;
use crate::{Error, Result, config::AgentConfig};
use async_trait::async_trait;
use reqwest::{StatusCode, header};
use std::time::Duration;
use tracing::{debug, warn};

/// Sends one invocation to the agent runtime.
///
/// Non-200 answers come back as [`AgentOutcome::Rejected`]; only failures to
/// get an answer at all (transport, timeout, undecodable 200 body, missing
/// configuration) are errors.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    async fn invoke(&self, invocation: Invocation) -> Result<AgentOutcome>;
}

pub struct AgentCoreClient {
    client: reqwest::Client,
    base_url: String,
    agent_arn: Option<String>,
}

impl AgentCoreClient {
    pub fn new(config: AgentConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        debug!(
            "Creating AgentCore client for {} (timeout {}s)",
            config.base_url(),
            config.timeout_seconds
        );

        Ok(Self {
            client,
            base_url: config.base_url(),
            agent_arn: config.agent_arn,
        })
    }

    pub fn invocation_url(&self) -> Result<String> {
        let agent_arn = self
            .agent_arn
            .as_deref()
            .filter(|arn| !arn.is_empty())
            .ok_or(Error::MissingConfig("AGENT_ARN"))?;

        Ok(invocation_url(&self.base_url, agent_arn))
    }
}

/// `<base>/runtimes/<arn>/invocations?qualifier=DEFAULT`, with every reserved
/// character of the ARN (including `/` and `:`) percent-encoded.
pub fn invocation_url(base_url: &str, agent_arn: &str) -> String {
    format!(
        "{}/runtimes/{}/invocations?qualifier=DEFAULT",
        base_url,
        urlencoding::encode(agent_arn)
    )
}

#[async_trait]
impl AgentInvoker for AgentCoreClient {
    async fn invoke(&self, invocation: Invocation) -> Result<AgentOutcome> {
        let url = self.invocation_url()?;

        debug!("Invoking AgentCore for session: {}", invocation.session_id);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", invocation.token))
            .header(header::CONTENT_TYPE, "application/json")
            .header(SESSION_ID_HEADER, invocation.session_id.as_str())
            .json(&invocation.payload())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::OK {
            let value = serde_json::from_str(&body).map_err(|e| {
                Error::InvalidResponse(format!("Failed to parse AgentCore response: {}", e))
            })?;
            debug!("AgentCore completed session: {}", invocation.session_id);
            Ok(AgentOutcome::Completed(value))
        } else {
            warn!(
                "AgentCore returned {} for session {}",
                status.as_u16(),
                invocation.session_id
            );
            Ok(AgentOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
