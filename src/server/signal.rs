// Shutdown signal handling
//
// SIGINT (Ctrl+C) and SIGTERM both stop the server. A plain Ctrl+C
// handler covers non-Unix hosts.

/// Resolves once a shutdown signal arrives.
#[cfg(unix)]
pub async fn wait_for_shutdown() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => {}
        _ = sigterm.recv() => {}
    }
}

/// Resolves once a shutdown signal arrives.
#[cfg(not(unix))]
pub async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a working signal handler the server can only run until
        // killed; never resolve, rather than shutting down spuriously.
        crate::logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
        std::future::pending::<()>().await;
    }
}
