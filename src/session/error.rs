//! Error types for the ordering session.

use thiserror::Error;

use crate::backend::BackendError;

/// Errors that can occur while driving the ordering session.
///
/// Catalog and menu failures never cross the session boundary as `Err`: the
/// actor converts them into user-visible state (`ViewState::Error` or the
/// snapshot banner) using the `Display` text below. Checkout failures *are*
/// returned to the caller so the cart-retention rule is observable. Seed
/// failures are logged and otherwise ignored.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The restaurant catalog could not be fetched.
    #[error("Failed to load restaurants")]
    CatalogLoad(#[source] BackendError),

    /// The selected restaurant's menu could not be fetched.
    #[error("Failed to load menu")]
    MenuLoad(#[source] BackendError),

    /// The order service rejected or never received the order. The cart is
    /// retained so the user can retry.
    #[error("Failed to place order: {0}")]
    OrderSubmit(BackendError),

    /// The demo-data seed call failed. The catalog reload proceeds anyway.
    #[error("Seed request failed: {0}")]
    Seed(BackendError),

    /// The session actor is no longer running.
    #[error("Session closed")]
    SessionClosed,

    /// The session actor dropped the response channel.
    #[error("Session dropped response channel")]
    SessionDropped,
}
