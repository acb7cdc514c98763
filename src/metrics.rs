use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("yaas_requests_total", "Total number of requests").unwrap();
    pub static ref REQUESTS_REJECTED: Counter =
        register_counter!("yaas_requests_rejected_total", "Requests rejected by the rate limiter").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "yaas_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: Gauge =
        register_gauge!("yaas_tracked_clients", "Client identities currently tracked by the rate limiter").unwrap();
}
