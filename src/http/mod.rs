//! HTTP protocol layer
//!
//! Protocol-level building blocks with no knowledge of the routing policy:
//! content-type inference, ETag revalidation, byte-range evaluation, and
//! response builders.

pub mod etag;
pub mod mime;
pub mod range;
pub mod response;
