//! Shared application state
//!
//! One immutable value built at startup and handed to every connection
//! behind an `Arc`.

use std::io;
use std::path::PathBuf;

use super::types::Config;

/// The loaded configuration plus the canonicalized document root that
/// every resolved path is checked against.
pub struct AppState {
    pub config: Config,
    /// Canonical form of `config.site.root`, fixed at startup.
    pub root: PathBuf,
}

impl AppState {
    /// Canonicalize the document root once. Fails when the root does not
    /// exist or cannot be read, which is a startup error worth dying for.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = config.site.root.canonicalize()?;
        Ok(Self { config, root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, ServerConfig, SiteConfig};

    fn config_with_root(root: PathBuf) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            site: SiteConfig {
                root,
                fallback: "index.html".to_string(),
            },
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
        }
    }

    #[test]
    fn canonicalizes_relative_root() {
        let state = AppState::new(config_with_root(PathBuf::from("."))).expect("cwd exists");
        assert!(state.root.is_absolute());
    }

    #[test]
    fn missing_root_is_a_startup_error() {
        let missing = std::env::temp_dir().join("spadev-no-such-root");
        assert!(AppState::new(config_with_root(missing)).is_err());
    }
}
