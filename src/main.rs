use agentcore_forwarder::{config, server};
use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// `RUST_LOG` wins over `server.logs.level`. Either must name a plain level.
fn resolve_log_level(rust_log: Option<String>, configured_level: &str) -> Result<String> {
    let level = rust_log.unwrap_or_else(|| configured_level.to_string());

    if level.parse::<LevelFilter>().is_err() {
        bail!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        );
    }

    Ok(level)
}

/// JSON logs filtered by the resolved level.
fn init_tracing(configured_level: &str) -> Result<String> {
    let level = resolve_log_level(std::env::var("RUST_LOG").ok(), configured_level)?;

    let filter = EnvFilter::try_new(&level)
        .with_context(|| format!("Failed to build log filter from '{}'", level))?;
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    Ok(level)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let level = init_tracing(&config.server.logs.level)?;

    info!(
        log_level = %level,
        agent_endpoint = %config.agent.base_url(),
        timeout_seconds = config.agent.timeout_seconds,
        "Starting AgentCore forwarder"
    );

    server::run(config).await?;

    Ok(())
}
