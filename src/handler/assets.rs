//! Static asset responder
//!
//! The serving half the router delegates to. A decided path (literal
//! asset or fallback document) is resolved inside the document root and
//! turned into a complete response: directory redirects, index documents,
//! content types, ETag revalidation, and byte ranges all live here, not
//! in the routing decision.

use std::io;
use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::range::{self, RangeOutcome};
use crate::http::{etag, mime, response};
use crate::logger;

/// Index documents tried, in order, for a directory path ending in `/`.
const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// How a request path resolved against the document root.
enum Resolved {
    /// A regular file to serve.
    File(PathBuf),
    /// A directory requested without a trailing slash; redirect to the
    /// slashed form.
    RedirectToDir,
    /// Nothing servable at this path.
    NotFound,
    /// The filesystem refused (permissions and friends).
    Failed(io::Error),
}

/// Resolve `path` under the document root and build the full response.
/// Every byte the server sends for a GET or HEAD comes through here,
/// fallback document included.
pub async fn respond(
    state: &AppState,
    path: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    match resolve(&state.root, path).await {
        Resolved::File(file) => serve_file(&file, ctx).await,
        Resolved::RedirectToDir => response::moved_permanently(&dir_location(path, ctx.query)),
        Resolved::NotFound => response::not_found(),
        Resolved::Failed(err) => {
            logger::log_error(&format!("Failed to resolve '{path}': {err}"));
            response::internal_error()
        }
    }
}

async fn resolve(root: &Path, path: &str) -> Resolved {
    let joined = root.join(path.trim_start_matches('/'));

    let full = match fs::canonicalize(&joined).await {
        Ok(full) => full,
        Err(e) if vanished(&e) => return Resolved::NotFound,
        Err(e) => return Resolved::Failed(e),
    };

    // Never follow a resolved path (.. segments, symlinks) out of the
    // document root.
    if !full.starts_with(root) {
        logger::log_warning(&format!("Refusing path outside document root: {path}"));
        return Resolved::NotFound;
    }

    match fs::metadata(&full).await {
        Ok(meta) if meta.is_dir() => {
            if path.ends_with('/') {
                resolve_index(root, &full).await
            } else {
                Resolved::RedirectToDir
            }
        }
        Ok(_) => Resolved::File(full),
        Err(e) if vanished(&e) => Resolved::NotFound,
        Err(e) => Resolved::Failed(e),
    }
}

/// First index document present in `dir`, if any. Candidates get the same
/// canonicalize-and-contain treatment as every other served path: an index
/// document that is a symlink out of the document root is refused, not
/// followed.
async fn resolve_index(root: &Path, dir: &Path) -> Resolved {
    for name in INDEX_FILES {
        let source = dir.join(name);
        let candidate = match fs::canonicalize(&source).await {
            Ok(candidate) => candidate,
            Err(e) if vanished(&e) => continue,
            Err(e) => return Resolved::Failed(e),
        };
        if !candidate.starts_with(root) {
            logger::log_warning(&format!(
                "Refusing index document outside document root: {}",
                source.display()
            ));
            return Resolved::NotFound;
        }
        if candidate.is_file() {
            return Resolved::File(candidate);
        }
    }
    Resolved::NotFound
}

/// NotFound also covers a path component that turned out to be a file,
/// as in `/style.css/anything`.
fn vanished(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Redirect target for a directory requested without its trailing slash.
/// The query string survives the redirect untouched.
fn dir_location(path: &str, query: Option<&str>) -> String {
    let mut location = if path.starts_with('/') {
        format!("{path}/")
    } else {
        format!("/{path}/")
    };
    if let Some(query) = query {
        location.push('?');
        location.push_str(query);
    }
    location
}

async fn serve_file(file: &Path, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let data = match fs::read(file).await {
        Ok(data) => data,
        Err(e) if vanished(&e) => return response::not_found(),
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", file.display()));
            return response::internal_error();
        }
    };

    let content_type = mime::content_type_for(file);
    let etag = etag::compute(&data);

    if etag::revalidates(ctx.if_none_match.as_deref(), &etag) {
        return response::not_modified(&etag);
    }

    match range::evaluate(ctx.range.as_deref(), data.len()) {
        RangeOutcome::Slice(span) => {
            let body = Bytes::from(data[span.start..=span.end].to_vec());
            response::partial_content(body, span, data.len(), content_type, &etag, ctx.is_head)
        }
        RangeOutcome::Unsatisfiable => response::range_not_satisfiable(data.len()),
        RangeOutcome::Whole => {
            let len = data.len();
            response::file_ok(Bytes::from(data), len, content_type, &etag, ctx.is_head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig, SiteConfig};
    use http_body_util::BodyExt;
    use hyper::StatusCode;
    use tempfile::TempDir;

    fn state_for(root: &Path) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            site: SiteConfig {
                root: root.to_path_buf(),
                fallback: "index.html".to_string(),
            },
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
        };
        AppState::new(config).expect("root canonicalizes")
    }

    fn plain_ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            query: None,
            is_head: false,
            if_none_match: None,
            range: None,
        }
    }

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.expect("body").to_bytes()
    }

    #[test]
    fn dir_location_appends_slash_and_keeps_query() {
        assert_eq!(dir_location("/assets", None), "/assets/");
        assert_eq!(dir_location("/assets", Some("v=2")), "/assets/?v=2");
        assert_eq!(dir_location("docs", None), "/docs/");
    }

    #[tokio::test]
    async fn directory_with_index_is_served() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join("docs")).expect("mkdir");
        std::fs::write(dir.path().join("docs").join("index.html"), "<docs/>").expect("write");
        let state = state_for(dir.path());

        let resp = respond(&state, "/docs/", &plain_ctx("/docs/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_of(resp).await.as_ref(), b"<docs/>");
    }

    #[tokio::test]
    async fn index_htm_is_the_second_choice() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join("docs")).expect("mkdir");
        std::fs::write(dir.path().join("docs").join("index.htm"), "old school").expect("write");
        let state = state_for(dir.path());

        let resp = respond(&state, "/docs/", &plain_ctx("/docs/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_of(resp).await.as_ref(), b"old school");
    }

    #[tokio::test]
    async fn directory_without_index_is_not_listed() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join("assets")).expect("mkdir");
        std::fs::write(dir.path().join("assets").join("app.js"), "boot()").expect("write");
        let state = state_for(dir.path());

        let resp = respond(&state, "/assets/", &plain_ctx("/assets/")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn traversal_out_of_the_root_is_refused() {
        let parent = TempDir::new().expect("tempdir");
        let site = parent.path().join("site");
        std::fs::create_dir(&site).expect("mkdir");
        std::fs::write(parent.path().join("secret.txt"), "keys").expect("write");
        let state = state_for(&site);

        let resp = respond(&state, "/../secret.txt", &plain_ctx("/../secret.txt")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_index_cannot_leave_the_root() {
        let parent = TempDir::new().expect("tempdir");
        let site = parent.path().join("site");
        std::fs::create_dir_all(site.join("docs")).expect("mkdir");
        std::fs::write(parent.path().join("secret.txt"), "keys").expect("write");
        std::os::unix::fs::symlink(
            parent.path().join("secret.txt"),
            site.join("docs").join("index.html"),
        )
        .expect("symlink");
        let state = state_for(&site);

        let resp = respond(&state, "/docs/", &plain_ctx("/docs/")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
