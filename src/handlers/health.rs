use axum::{Json, extract::State};
use std::sync::Arc;

use crate::models::{HealthResponse, StatusResponse};
use crate::state::AppState;

// health handler
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "operational".to_string(),
    })
}
