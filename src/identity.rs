use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolve the identity string the rate limiter keys on.
///
/// With `trust_proxy` set, forwarded headers win: the first entry of
/// `X-Forwarded-For`, then `X-Real-IP`. Otherwise only the transport peer
/// address is used, since anyone can set the headers. Returns `None` when
/// nothing resolves, which callers treat as unlimited.
pub fn client_identity(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_proxy: bool,
) -> Option<String> {
    if trust_proxy {
        if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
            // first entry is the original client, the rest are proxies
            if let Some(client) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
                return Some(client.to_string());
            }
        }
        if let Some(real_ip) = header_str(headers, "x-real-ip") {
            let real_ip = real_ip.trim();
            if !real_ip.is_empty() {
                return Some(real_ip.to_string());
            }
        }
    }

    peer.map(|addr| addr.ip().to_string())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
