//! ETag computation and revalidation
//!
//! A development server should never let the browser reuse stale assets, so
//! every file response carries a content-derived ETag and conditional
//! requests are answered with 304 when the bytes are unchanged.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute the ETag for a body, as a quoted hex digest.
///
/// The digest only has to be stable for identical bytes within one server
/// process; a non-cryptographic hash is enough for revalidation.
pub fn compute(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Decide whether an `If-None-Match` header revalidates the given ETag.
///
/// Accepts a single ETag, a comma-separated list, or `*`. A `true` result
/// means the client's copy is current and a 304 should be sent.
pub fn revalidates(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag || candidate == "*")
    })
}
