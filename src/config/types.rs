//! Configuration types
//!
//! Plain data shapes filled in by the loader in `mod.rs`. Everything here
//! is deserialized once at startup and shared read-only afterwards.

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

/// Listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads. `None` leaves the runtime at its default
    /// (one per core).
    pub workers: Option<usize>,
}

/// What to serve.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Document root every request path resolves against.
    pub root: PathBuf,
    /// Fallback document served for paths that match nothing on disk,
    /// resolved against the root.
    pub fallback: String,
}

/// Access and error logging.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Emit one access line per handled request.
    pub access_log: bool,
    /// `common`, `combined`, `json`, or a custom `$variable` pattern.
    pub access_log_format: String,
    /// Access log destination. `None` logs to stdout.
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log destination. `None` logs to stderr.
    #[serde(default)]
    pub error_log_file: Option<String>,
}
