use hyper::HeaderMap;
use std::net::SocketAddr;

/// The caller's address is X-Real-Ip if set, else the transport peer.
/// The forwarding server must send X-Real-Ip for its client's address to be
/// visible here; the header is trusted as-is, so the deployment must not
/// expose this port directly to untrusted clients.
pub fn real_addr(headers: &HeaderMap, remote: SocketAddr) -> String {
    match headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        Some(addr) if !addr.is_empty() => addr.to_string(),
        _ => remote.to_string(),
    }
}

/// Mutations are permitted only from the machine the server runs on.
pub fn is_local(addr: &str) -> bool {
    let host = addr.split_once(':').map_or(addr, |(host, _)| host);
    matches!(host, "localhost" | "127.0.0.1")
}
