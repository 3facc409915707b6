use sha2::{Digest, Sha256};

/// Deterministic cache key for a `(from, to, strategy)` query (fixed format:
/// changing it invalidates existing cache entries).
pub fn fingerprint(from: (f64, f64), to: (f64, f64), strategy: &str) -> String {
    let (from_lat, from_lon) = from;
    let (to_lat, to_lon) = to;
    let payload = format!(
        "{:.6},{:.6},{:.6},{:.6}",
        from_lat, from_lon, to_lat, to_lon
    );
    let digest = Sha256::digest(payload.as_bytes());
    let hex = format!("{:x}", digest);
    format!("route:{}:{}", &hex[..8], strategy)
}

/// The single-flight lock key guarding computation of `route_key`.
pub fn lock_key(route_key: &str) -> String {
    format!("lock:{}", route_key)
}
