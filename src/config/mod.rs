//! Configuration loading
//!
//! Layered sources, lowest priority first: built-in defaults that mirror
//! the classic one-liner dev server (bind 127.0.0.1:8000, serve the
//! current directory, fall back to `index.html`), an optional `spadev`
//! config file, then `SPADEV_*` environment variables.

mod state;
mod types;

pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, SiteConfig};

use std::net::SocketAddr;

impl Config {
    /// Load configuration from the default `spadev` file (any extension
    /// the `config` crate understands, e.g. `spadev.toml`), if present.
    ///
    /// # Errors
    ///
    /// Returns an error when a config file exists but cannot be parsed,
    /// or when a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("spadev")
    }

    /// Load configuration from a named file over the built-in defaults,
    /// then apply `SPADEV_*` environment variables on top. Nested keys
    /// use a double underscore: `SPADEV_SERVER__PORT=9000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("site.root", ".")?
            .set_default("site.fallback", "index.html")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SPADEV").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// The address to bind, from `server.host` and `server.port`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the bad value when the pair does not
    /// parse as a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let address = format!("{}:{}", self.server.host, self.server.port);
        address
            .parse()
            .map_err(|e| format!("Invalid listen address '{address}': {e}"))
    }
}
