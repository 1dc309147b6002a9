//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the storefront client.
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate. Log levels are configured via `RUST_LOG`; the compact format hides
//! module paths to keep lines short while preserving structured fields.
//!
//! ## What Gets Traced
//!
//! - **Session lifecycle**: startup and shutdown of the session actor
//! - **State transitions**: catalog loads, selects, cart mutations, checkout
//! - **Backend calls**: every HTTP request at debug level
//! - **Failures**: catalog/menu/seed/checkout errors with their causes
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Include per-request backend logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to the session only
//! RUST_LOG=quickbite_client::session=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Keep lines short; events carry their own context
        .compact()
        .init();
}
