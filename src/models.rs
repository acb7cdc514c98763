use serde::{Deserialize, Serialize};

// Canned answer for POST /
#[derive(Deserialize, Serialize, Clone)]
pub struct YesResponse {
    pub response: String,
}

// GET /status payload
#[derive(Deserialize, Serialize, Clone)]
pub struct StatusResponse {
    pub status: String,
}

// GET /health payload
#[derive(Deserialize, Serialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
}
