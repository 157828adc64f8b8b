pub mod handlers;

use crate::{Result, config::Config, forwarder::Forwarder};
use axum::{Router, extract::DefaultBodyLimit};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .fallback(handlers::invocations)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    if config.agent.agent_arn.is_none() {
        warn!("No agent ARN configured; invocations will fail until AGENT_ARN is set");
    }

    let forwarder = Forwarder::from_config(&config.agent)?;

    let app_state = AppState {
        forwarder: Arc::new(forwarder),
    };

    let app = router(app_state, config.server.max_body_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
