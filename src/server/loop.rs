// Server main loop
// Binds the listener and accepts connections until a shutdown signal.

use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::logger;
use crate::server::{connection, listener, signal};

/// Bind and serve until shutdown.
///
/// Canonicalizes the document root, binds the configured address, then
/// loops accepting connections. Each connection is served on its own
/// task; a failed accept is logged and the loop keeps going.
///
/// # Errors
///
/// Returns an error when the configured address does not parse, the
/// document root does not exist, or the listener cannot be bound.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config)?);

    let tcp_listener = listener::bind(addr)?;
    logger::log_server_start(&addr, &state.config);

    let shutdown = signal::wait_for_shutdown();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = tcp_listener.accept() => {
                match accepted {
                    Ok((stream, peer_addr)) => {
                        connection::serve(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                logger::log_shutdown();
                break;
            }
        }
    }

    Ok(())
}
