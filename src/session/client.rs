//! Type-safe handle for driving the session actor.

use tokio::sync::{mpsc, oneshot};

use super::error::SessionError;
use super::message::{CheckoutOutcome, SessionRequest};
use super::state::SessionSnapshot;
use crate::model::{MenuItem, Restaurant};

/// A cloneable client for the [`SessionActor`](super::SessionActor).
///
/// Every call resolves with the [`SessionSnapshot`] taken after the
/// transition, which is all a rendering layer needs. Fetch failures for the
/// catalog and menu are *not* errors here; they show up inside the snapshot
/// (`ViewState::Error` or the banner). Only checkout reports its failure as
/// an `Err`, since the caller must know the cart was retained.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T, F>(&self, make: F) -> Result<T, SessionError>
    where
        F: FnOnce(oneshot::Sender<Result<T, SessionError>>) -> SessionRequest,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)?
    }

    /// Fetches the restaurant catalog. Exactly one network call; no retry.
    pub async fn load(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|respond_to| SessionRequest::Load { respond_to })
            .await
    }

    /// Seeds demo data, then reloads the catalog regardless of the seed
    /// call's outcome.
    pub async fn seed_and_reload(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|respond_to| SessionRequest::SeedAndReload { respond_to })
            .await
    }

    /// Selects a restaurant and fetches its menu. Resolves once the fetch
    /// settles — applied, failed, or discarded because a newer select (or a
    /// `back`) superseded it.
    pub async fn select(&self, restaurant: Restaurant) -> Result<SessionSnapshot, SessionError> {
        self.request(|respond_to| SessionRequest::Select {
            restaurant,
            respond_to,
        })
        .await
    }

    /// Returns to the restaurant list, keeping the cart.
    pub async fn back(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|respond_to| SessionRequest::Back { respond_to })
            .await
    }

    /// Adds one unit of a menu item to the cart.
    pub async fn add_item(&self, item: MenuItem) -> Result<SessionSnapshot, SessionError> {
        self.request(|respond_to| SessionRequest::AddItem { item, respond_to })
            .await
    }

    /// Removes a whole cart line by menu-item identity. No-op if absent.
    pub async fn remove_item(
        &self,
        item_id: impl Into<String>,
    ) -> Result<SessionSnapshot, SessionError> {
        let item_id = item_id.into();
        self.request(|respond_to| SessionRequest::RemoveItem {
            item_id,
            respond_to,
        })
        .await
    }

    /// Submits the cart as an order. `Ok(NotReady)` when checkout is
    /// unavailable; `Err` when the order service fails (cart retained).
    pub async fn checkout(&self) -> Result<CheckoutOutcome, SessionError> {
        self.request(|respond_to| SessionRequest::Checkout { respond_to })
            .await
    }

    /// Observes the current state without mutating anything.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|respond_to| SessionRequest::Snapshot { respond_to })
            .await
    }
}
