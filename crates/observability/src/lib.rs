//! Tracing and logging setup for binaries that age stock.
//!
//! The domain crates only emit `tracing` events and never install a
//! subscriber; a downstream binary calls [`init`] once at startup to get JSON
//! logs filtered by `RUST_LOG`. This crate's own tests run the engine under it.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
