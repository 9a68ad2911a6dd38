//! Logger
//!
//! The server's own logging layer: a startup banner, warning and error
//! lines, and a per-request access log. Output goes to stdout/stderr unless
//! the configuration points either stream at a file.

mod access;
pub mod writer;

pub use access::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::Config;

/// Install the log sinks from configuration. Call once, before serving.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(line: &str) {
    match writer::sinks() {
        Some(sinks) => sinks.write_access(line),
        None => println!("{line}"),
    }
}

fn write_error(line: &str) {
    match writer::sinks() {
        Some(sinks) => sinks.write_error(line),
        None => eprintln!("{line}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info(&format!(
        "Serving {} at http://{addr}",
        config.site.root.display()
    ));
    write_info(&format!(
        "SPA fallback document: {}",
        config.site.fallback
    ));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("Press Ctrl-C to stop");
    write_info("======================================\n");
}

pub fn log_shutdown() {
    write_info("\nShutdown signal received, exiting.");
}

/// Emit one access log line in the configured format.
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    match writer::sinks() {
        Some(sinks) => sinks.write_access(&entry.render(format)),
        None => println!("{}", entry.render(format)),
    }
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}
