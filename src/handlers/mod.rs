mod health;
mod metrics;
mod yes;

pub use health::{health_handler, status_handler};
pub use metrics::metrics_handler;
pub use yes::yes_handler;

use crate::error::ApiError;

// anything that doesn't match a route
pub async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}
