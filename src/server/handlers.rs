use crate::forwarder::Forwarder;
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Method},
    response::Response,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// Catch-all entry: every path and method goes through the forwarder.
///
/// Body rejections are handed to the forwarder too, so they get the same
/// CORS headers and JSON error shape as every other failure.
pub async fn invocations(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    state
        .forwarder
        .handle(&method, &headers, body.map_err(Into::into))
        .await
}
