use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::debug;

use crate::metrics::TRACKED_CLIENTS;

// Usage record - tracks requests per client identity within the current window
struct ClientUsage {
    count: u32,
    window_start: Instant,
}

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Rejected,
}

/// Fixed-window request counter, keyed by client identity.
///
/// One record per identity; the record resets whenever a request arrives more
/// than a full window after `window_start`. Counting is deliberately
/// fixed-window: a burst straddling a window boundary can get through with up
/// to twice the configured limit. Rejected requests still count, so once a
/// client is over the limit it stays rejected until its window expires.
pub struct RateLimiter {
    clients: DashMap<String, ClientUsage>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            clients: DashMap::new(),
            max_requests,
            window,
        }
    }

    /// Admit or reject a request from `identity`, counting it against the
    /// current window. An empty identity is never limited.
    pub fn admit(&self, identity: &str) -> Decision {
        self.admit_at(identity, Instant::now())
    }

    // entry() holds the shard lock for the identity, so concurrent requests
    // from the same client cannot lose updates
    pub fn admit_at(&self, identity: &str, now: Instant) -> Decision {
        if identity.is_empty() {
            return Decision::Allowed;
        }

        let mut entry = self
            .clients
            .entry(identity.to_string())
            .or_insert(ClientUsage {
                count: 0,
                window_start: now,
            });

        // window expired? start a new one with this request as the first
        if now.duration_since(entry.window_start) > self.window {
            entry.count = 1;
            entry.window_start = now;
            return Decision::Allowed;
        }

        entry.count = entry.count.saturating_add(1);

        if entry.count > self.max_requests {
            Decision::Rejected
        } else {
            Decision::Allowed
        }
    }

    /// Drop records whose window has already elapsed. Expired records would
    /// be reset on their next request anyway, so this never changes an
    /// admission outcome.
    pub fn purge_expired(&self) {
        let window = self.window;
        self.clients
            .retain(|_, usage| usage.window_start.elapsed() <= window);
    }

    /// Number of identities currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}

// Background maintenance - runs for the life of the server
pub async fn purge_worker(limiter: Arc<RateLimiter>, every: Duration) {
    let mut ticker = interval(every);

    loop {
        ticker.tick().await;
        limiter.purge_expired();
        let tracked = limiter.tracked_clients();
        TRACKED_CLIENTS.set(tracked as f64);
        debug!("purged expired usage records, {} clients tracked", tracked);
    }
}
