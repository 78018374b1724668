//! Request signing for the catalog API.
//!
//! Server-side callers authenticate every request with three query
//! parameters: a timestamp `ts`, the public key as `apikey`, and
//! `hash = md5(ts + private_key + public_key)` in lowercase hex.

use md5::{Digest, Md5};

/// Compute the `hash` parameter for a request made at `ts`.
pub fn request_hash(ts: &str, private_key: &str, public_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(ts.as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Current time in milliseconds, the `ts` value sent with each request.
pub fn timestamp() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
