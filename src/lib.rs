//! A local development HTTP server for single-page applications.
//!
//! Files under the document root are served literally; any GET whose path
//! matches nothing on disk (or ends in `/`) gets the fallback document
//! instead, so client-side routes survive a browser refresh and deep
//! links pasted into the address bar.
//!
//! The binary in `main.rs` only wires configuration, logging, and the
//! accept loop together; everything else lives here so the handler can be
//! driven directly from tests.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
