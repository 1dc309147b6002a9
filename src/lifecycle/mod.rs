//! Wiring and runtime concerns: bootstrapping the session against a
//! backend, graceful shutdown, and tracing setup.

pub mod storefront;
pub mod tracing;

pub use storefront::Storefront;
pub use tracing::setup_tracing;
