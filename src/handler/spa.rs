//! The fallback routing decision
//!
//! A single-page app owns its URL space in the browser, so the server has
//! exactly one choice to make per GET: does this path name a real file, or
//! should the client-side router get the fallback document and sort it out
//! itself? The whole decision is a pure function of the document root, the
//! request path, and the filesystem at that instant.

use std::path::Path;

/// Where a GET request is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaRoute {
    /// The path names something that exists on disk; serve it literally.
    Asset,
    /// Nothing matches, or the path carries a trailing slash; serve the
    /// fallback document.
    Fallback,
}

/// Classify a request path against the document root.
///
/// The candidate is the path with one leading `/` removed, joined to the
/// root. Anything ending in `/` falls back unconditionally, even when a
/// directory of that name exists.
///
/// # Examples
///
/// With `style.css` on disk and `dashboard/settings` not:
///
/// ```
/// use spadev::handler::spa::{classify, SpaRoute};
/// # let dir = tempfile::TempDir::new().unwrap();
/// # std::fs::write(dir.path().join("style.css"), "body{}").unwrap();
/// # let root = dir.path();
/// assert_eq!(classify(root, "/style.css"), SpaRoute::Asset);
/// assert_eq!(classify(root, "/dashboard/settings"), SpaRoute::Fallback);
/// assert_eq!(classify(root, "/"), SpaRoute::Fallback);
/// ```
#[must_use]
pub fn classify(root: &Path, path: &str) -> SpaRoute {
    let candidate = path.strip_prefix('/').unwrap_or(path);

    // For "/" the candidate is empty and join() names the root directory
    // itself. The trailing-slash test already sends "/" to the fallback,
    // so the existence probe never decides that case.
    if root.join(candidate).exists() && !path.ends_with('/') {
        SpaRoute::Asset
    } else {
        SpaRoute::Fallback
    }
}
