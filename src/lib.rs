//! YaaS - yes as a service
//!
//! A minimal HTTP API that answers "yes", guarded by a per-client
//! fixed-window rate limiter. The library target exists so integration
//! tests can assemble the exact router the binary serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use rate_limit::{Decision, RateLimiter};
pub use routes::router;
pub use state::AppState;
