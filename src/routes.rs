use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::handlers;
use crate::middleware::admission;
use crate::state::AppState;

// Router assembly, shared between the binary and the integration tests.
// The admission gate wraps everything, /metrics and the 404 fallback included.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handlers::yes_handler))
        .route("/status", get(handlers::status_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .fallback(handlers::fallback_handler)
        .layer(from_fn_with_state(state.clone(), admission))
        .with_state(state)
}
