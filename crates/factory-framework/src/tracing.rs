//! # Observability & Tracing
//!
//! Structured logging for the factory framework. Setters and the bulk
//! synchronizer emit `debug!` before operations, `info!` on commits, and
//! `warn!` when validation rejects a value, all with structured fields
//! (`property`, `message`, `failures`).

/// Initializes the tracing subscriber for the application.
///
/// Filtering is controlled via the `RUST_LOG` environment variable:
/// `RUST_LOG=debug` shows the full value payloads logged by setters,
/// `RUST_LOG=info` shows commits and rejections only.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
