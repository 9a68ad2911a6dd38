//! HTTP response builders
//!
//! One builder per status the server can produce. Every asset response
//! carries `Cache-Control: no-cache`: the browser may keep a copy but must
//! revalidate it on each load, which is the contract a development server
//! needs after every rebuild.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::range::ByteRange;

const NO_CACHE: &str = "no-cache";

/// 200 with the full file body. `len` is the real body size, kept in
/// Content-Length even when a HEAD request suppresses the body itself.
pub fn file_ok(
    body: Bytes,
    len: usize,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head { Bytes::new() } else { body };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", len)
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", NO_CACHE)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 206 with an already-sliced body span out of `total` bytes.
pub fn partial_content(
    body: Bytes,
    span: ByteRange,
    total: usize,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let len = span.end - span.start + 1;
    let body = if is_head { Bytes::new() } else { body };

    Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", len)
        .header(
            "Content-Range",
            format!("bytes {}-{}/{}", span.start, span.end, total),
        )
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", NO_CACHE)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 301 to a directory path with its trailing slash restored.
pub fn moved_permanently(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("301 Moved Permanently")))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 304 for a revalidated ETag.
pub fn not_modified(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", NO_CACHE)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 404 Not Found.
pub fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// 405 for anything that is not a GET or HEAD.
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// 416 when a byte range cannot overlap the file.
pub fn range_not_satisfiable(len: usize) -> Response<Full<Bytes>> {
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain")
        .header("Content-Range", format!("bytes */{len}"))
        .body(Full::new(Bytes::from("416 Range Not Satisfiable")))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(Full::new(Bytes::from("416 Range Not Satisfiable")))
        })
}

/// 500 for filesystem errors other than absence.
pub fn internal_error() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
