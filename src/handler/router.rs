//! Request routing
//!
//! The per-request entry point: method gate, the GET fallback decision,
//! HEAD passthrough, and the access log line. GET is the only method the
//! fallback rule rewrites; HEAD goes straight to the plain file-serving
//! mechanism, and everything else is refused outright.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};

use crate::config::AppState;
use crate::handler::{assets, spa};
use crate::http::response;
use crate::logger::{self, AccessLogEntry};

/// The slice of a request the responder needs: the decided path is passed
/// separately, so the fallback rewrite never loses the original context.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range: Option<String>,
}

/// Handle one request end to end. Generic over the body type: the server
/// feeds it `hyper::body::Incoming`, tests drive it with `Empty<Bytes>`.
/// The request body itself is never read.
pub async fn handle<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let ctx = RequestContext {
        path: req.uri().path(),
        query: req.uri().query(),
        is_head: req.method() == Method::HEAD,
        if_none_match: header_string(&req, "if-none-match"),
        range: header_string(&req, "range"),
    };

    let resp = match req.method() {
        &Method::GET => match spa::classify(&state.root, ctx.path) {
            spa::SpaRoute::Asset => assets::respond(&state, ctx.path, &ctx).await,
            spa::SpaRoute::Fallback => {
                assets::respond(&state, &state.config.site.fallback, &ctx).await
            }
        },
        &Method::HEAD => assets::respond(&state, ctx.path, &ctx).await,
        _ => response::method_not_allowed(),
    };

    if state.config.logging.access_log {
        let entry = access_entry(&req, peer_addr, &resp, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(resp)
}

fn access_entry<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    resp: &Response<Full<Bytes>>,
    started: Instant,
) -> AccessLogEntry {
    AccessLogEntry {
        remote_addr: peer_addr.to_string(),
        time: Local::now(),
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(ToString::to_string),
        http_version: version_label(req.version()).to_string(),
        status: resp.status().as_u16(),
        body_bytes: resp.body().size_hint().exact().unwrap_or(0),
        referer: header_string(req, "referer"),
        user_agent: header_string(req, "user-agent"),
        request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}
