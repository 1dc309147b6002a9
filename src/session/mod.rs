//! # Ordering Session
//!
//! The client-side ordering state machine: one actor owning all storefront
//! state, one typed client for driving it.
//!
//! ## Key Types
//!
//! - [`SessionState`]: the explicit state container with pure transitions.
//! - [`SessionActor`]: the tokio task that processes requests sequentially.
//! - [`SessionClient`]: the cloneable handle used by callers.
//! - [`SessionError`]: failure taxonomy (catalog, menu, checkout, seed).

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod state;

pub use actor::SessionActor;
pub use client::SessionClient;
pub use error::SessionError;
pub use message::{CheckoutOutcome, Response, SessionRequest};
pub use state::{SelectToken, SessionSnapshot, SessionState, ViewState};
