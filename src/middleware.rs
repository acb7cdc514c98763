use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use crate::error::ApiError;
use crate::identity::client_identity;
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL, REQUESTS_REJECTED};
use crate::rate_limit::Decision;
use crate::state::AppState;

// Admission gate - every route passes through here before its handler runs.
// An unresolvable identity skips the limiter entirely.
pub async fn admission(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    REQUEST_TOTAL.inc();

    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0);

    if let Some(identity) = client_identity(req.headers(), peer, state.trust_proxy) {
        if state.limiter.admit(&identity) == Decision::Rejected {
            REQUESTS_REJECTED.inc();
            warn!("rate limit exceeded for {}", identity);
            return ApiError::TooManyRequests.into_response();
        }
    }

    let start_time = Instant::now();
    let response = next.run(req).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    response
}
