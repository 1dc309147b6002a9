//! Messages exchanged between [`SessionClient`](super::SessionClient) and
//! [`SessionActor`](super::SessionActor).
//!
//! Every user-facing operation is one variant; each carries a oneshot
//! channel that resolves with the post-transition
//! [`SessionSnapshot`] (or the checkout outcome). `Select` resolves only
//! once its menu fetch settles, applied or discarded, which makes
//! overlapping-select tests deterministic.

use tokio::sync::oneshot;

use super::error::SessionError;
use super::state::SessionSnapshot;
use crate::model::{MenuItem, OrderReceipt, Restaurant};

/// Type alias for the one-shot response channel used by the session actor.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Result of a checkout attempt.
///
/// `NotReady` mirrors "the checkout button has no effect": with no active
/// restaurant or an empty cart, no request is issued and nothing changes.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The order service accepted the order; `total` in the receipt is the
    /// service's figure, reported verbatim.
    Placed(OrderReceipt),
    /// Precondition unmet; checkout was silently unavailable.
    NotReady,
}

/// Requests processed sequentially by the session actor.
#[derive(Debug)]
pub enum SessionRequest {
    /// Fetch the restaurant catalog.
    Load {
        respond_to: Response<SessionSnapshot>,
    },
    /// Seed demo data, then reload the catalog regardless of the seed
    /// outcome.
    SeedAndReload {
        respond_to: Response<SessionSnapshot>,
    },
    /// Choose a restaurant and fetch its menu.
    Select {
        restaurant: Restaurant,
        respond_to: Response<SessionSnapshot>,
    },
    /// Return to the restaurant list.
    Back {
        respond_to: Response<SessionSnapshot>,
    },
    /// Add one unit of a menu item to the cart.
    AddItem {
        item: MenuItem,
        respond_to: Response<SessionSnapshot>,
    },
    /// Remove a whole cart line by menu-item identity.
    RemoveItem {
        item_id: String,
        respond_to: Response<SessionSnapshot>,
    },
    /// Validate, serialize and submit the cart as an order.
    Checkout {
        respond_to: Response<CheckoutOutcome>,
    },
    /// Read-only observation of the current state.
    Snapshot {
        respond_to: Response<SessionSnapshot>,
    },
}
