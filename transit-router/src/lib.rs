//! Coordination and I/O layer on top of `transit-router-core`: configuration,
//! the distributed result cache, and the query coordinator that fans the four
//! strategies out in parallel and applies the single-flight cache protocol.

pub mod app;
pub mod cache;
pub mod cli;
