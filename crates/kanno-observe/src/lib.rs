//! Logging setup for kanno binaries.
//!
//! Library crates only emit `tracing` events; this crate decides where they go.
mod logger;
pub use logger::*;
