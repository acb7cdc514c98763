use std::sync::Arc;
use std::time::Instant;
use crate::rate_limit::RateLimiter;
// app's shared state

pub struct AppState {
    pub limiter: Arc<RateLimiter>,
    pub start_time: Instant, // for uptime reporting
    pub trust_proxy: bool,   // whether forwarded headers are believed
}

impl AppState {
    pub fn new(limiter: Arc<RateLimiter>, trust_proxy: bool) -> Self {
        Self {
            limiter,
            start_time: Instant::now(),
            trust_proxy,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
