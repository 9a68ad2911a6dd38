//! Server runtime
//!
//! Listener construction, the accept loop, per-connection serving, and
//! shutdown signals.

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the file is mounted under another name
#[path = "loop.rs"]
pub mod server_loop;

pub use server_loop::run;
