use axum::{Json, body::Bytes};
use tracing::debug;

use crate::models::YesResponse;

// The whole point of the service. Any posted body is logged and ignored;
// the answer is always yes.
pub async fn yes_handler(body: Bytes) -> Json<YesResponse> {
    if !body.is_empty() {
        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(payload) => debug!("received request: {}", payload),
            Err(_) => debug!("received request with non-JSON body ({} bytes)", body.len()),
        }
    }

    Json(YesResponse {
        response: "yes".to_string(),
    })
}
