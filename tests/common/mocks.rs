use agentcore_forwarder::{
    Error, Result,
    agentcore::{AgentInvoker, AgentOutcome, Invocation},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::{
    io,
    sync::{Arc, Mutex},
};

/// Mock invoker that records every invocation it receives
#[derive(Debug, Clone)]
pub struct MockAgentInvoker {
    pub invocations: Arc<Mutex<Vec<Invocation>>>,
    pub outcome: AgentOutcome,
    pub error: Option<String>,
}

impl MockAgentInvoker {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            outcome: AgentOutcome::Completed(json!({"output": {"message": "Hello from the agent"}})),
            error: None,
        }
    }

    pub fn with_completed(mut self, value: Value) -> Self {
        self.outcome = AgentOutcome::Completed(value);
        self
    }

    pub fn with_rejected(mut self, status: u16, body: &str) -> Self {
        self.outcome = AgentOutcome::Rejected {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentInvoker for MockAgentInvoker {
    async fn invoke(&self, invocation: Invocation) -> Result<AgentOutcome> {
        self.invocations.lock().unwrap().push(invocation);

        if let Some(ref error) = self.error {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::ConnectionReset,
                error.clone(),
            )));
        }

        Ok(self.outcome.clone())
    }
}

impl Default for MockAgentInvoker {
    fn default() -> Self {
        Self::new()
    }
}
