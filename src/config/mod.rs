mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(config_path) => from_file(&config_path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => from_file(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    apply_env_overrides(&mut config, env::var("AGENT_ARN").ok());

    Ok(config)
}

pub async fn from_file(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Failed to read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// `AGENT_ARN` from the environment wins over the file.
pub fn apply_env_overrides(config: &mut Config, agent_arn: Option<String>) {
    if let Some(arn) = agent_arn.filter(|arn| !arn.is_empty()) {
        debug!("Using agent ARN from AGENT_ARN environment variable");
        config.agent.agent_arn = Some(arn);
    }
}
