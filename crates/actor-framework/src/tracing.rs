//! # Tracing Setup
//!
//! Installs the process-wide `tracing` subscriber used by every actor.
//!
//! Actors log their lifecycle at `info` (`Actor started`, `Created`, `Action ok`, `Shutdown`)
//! and full payloads at `debug`. Log lines carry an `entity_type` field instead of the module
//! path, so the target is hidden.
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! RUST_LOG=info,yummy_delivery=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Calling it again after a subscriber is installed does nothing.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
