//! Request handling
//!
//! Split the way the server thinks about a request: `spa` makes the
//! one routing decision, `assets` turns a decided path into a response,
//! and `router` ties them to HTTP methods and the access log.

pub mod assets;
pub mod router;
pub mod spa;

pub use router::handle;
