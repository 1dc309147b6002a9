//! # Session Actor
//!
//! The "server" half of the ordering session. [`SessionActor`] owns the
//! [`SessionState`] and processes [`SessionRequest`]s sequentially from an
//! mpsc channel, so every mutation happens in reaction to a completed
//! network call or a direct user action and no locking is needed anywhere.
//!
//! Menu fetches are the one suspension point that must not stall the loop:
//! a user may tap another restaurant before the first menu arrives. Each
//! select spawns its fetch into its own task, which posts the outcome back
//! through an internal completion channel tagged with the select's
//! [`SelectToken`]. The state machine applies an outcome only if its token
//! is still the latest issued; a slow earlier response can never overwrite a
//! faster later one.
//!
//! Catalog loads and checkout submissions run inline: neither races
//! anything, and blocking the loop for them matches the "one action at a
//! time" feel of the storefront.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::client::SessionClient;
use super::error::SessionError;
use super::message::{CheckoutOutcome, Response, SessionRequest};
use super::state::{SelectToken, SessionSnapshot, SessionState};
use crate::backend::{BackendError, OrderingBackend};
use crate::model::MenuItem;

/// Outcome of a spawned menu fetch, routed back into the actor loop.
struct MenuFetchOutcome {
    token: SelectToken,
    result: Result<Vec<MenuItem>, BackendError>,
}

/// The actor that owns the ordering state machine.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    completion_tx: mpsc::Sender<MenuFetchOutcome>,
    completion_rx: mpsc::Receiver<MenuFetchOutcome>,
    state: SessionState,
    /// Select callers waiting for their menu fetch to settle, keyed by token.
    pending_selects: HashMap<u64, Response<SessionSnapshot>>,
}

impl SessionActor {
    /// Creates a new `SessionActor` and its associated `SessionClient`.
    pub fn new(buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_tx, completion_rx) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            completion_tx,
            completion_rx,
            state: SessionState::new(),
            pending_selects: HashMap::new(),
        };
        let client = SessionClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client handle is dropped.
    ///
    /// The backend is injected here, not at construction, so the same actor
    /// wiring serves the HTTP backend in production and the scripted mock in
    /// tests.
    pub async fn run(mut self, backend: Arc<dyn OrderingBackend>) {
        info!("Session started");

        loop {
            tokio::select! {
                maybe_request = self.receiver.recv() => match maybe_request {
                    Some(request) => self.handle_request(request, &backend).await,
                    None => break,
                },
                Some(outcome) = self.completion_rx.recv() => {
                    self.handle_menu_settled(outcome);
                }
            }
        }

        info!("Session shutdown");
    }

    async fn handle_request(&mut self, request: SessionRequest, backend: &Arc<dyn OrderingBackend>) {
        match request {
            SessionRequest::Load { respond_to } => {
                self.load_catalog(backend).await;
                let _ = respond_to.send(Ok(self.state.snapshot()));
            }
            SessionRequest::SeedAndReload { respond_to } => {
                // The seed outcome is logged and otherwise ignored; the
                // catalog refresh is the only user-visible effect.
                if let Err(e) = backend.seed_demo_data().await {
                    let err = SessionError::Seed(e);
                    warn!(error = %err, "Seed failed; reloading catalog anyway");
                }
                self.load_catalog(backend).await;
                let _ = respond_to.send(Ok(self.state.snapshot()));
            }
            SessionRequest::Select {
                restaurant,
                respond_to,
            } => {
                info!(restaurant_id = %restaurant.id, "Select");
                let restaurant_id = restaurant.id.clone();
                let token = self.state.begin_select(restaurant);
                self.pending_selects.insert(token.raw(), respond_to);

                let backend = Arc::clone(backend);
                let completion_tx = self.completion_tx.clone();
                tokio::spawn(async move {
                    let result = backend.fetch_menu(&restaurant_id).await;
                    let _ = completion_tx.send(MenuFetchOutcome { token, result }).await;
                });
            }
            SessionRequest::Back { respond_to } => {
                debug!("Back to restaurant list");
                self.state.back();
                let _ = respond_to.send(Ok(self.state.snapshot()));
            }
            SessionRequest::AddItem { item, respond_to } => {
                if self.state.add_item(&item) {
                    debug!(item_id = %item.id, total = self.state.cart().total(), "Item added");
                } else {
                    debug!(item_id = %item.id, "Add ignored");
                }
                let _ = respond_to.send(Ok(self.state.snapshot()));
            }
            SessionRequest::RemoveItem {
                item_id,
                respond_to,
            } => {
                self.state.remove_item(&item_id);
                debug!(%item_id, total = self.state.cart().total(), "Item removed");
                let _ = respond_to.send(Ok(self.state.snapshot()));
            }
            SessionRequest::Checkout { respond_to } => {
                let result = self.checkout(backend).await;
                let _ = respond_to.send(result);
            }
            SessionRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.state.snapshot()));
            }
        }
    }

    /// One catalog fetch; failures become `ViewState::Error`, never an `Err`
    /// past the session boundary.
    async fn load_catalog(&mut self, backend: &Arc<dyn OrderingBackend>) {
        self.state.begin_load();
        match backend.list_restaurants().await {
            Ok(restaurants) => {
                info!(count = restaurants.len(), "Catalog loaded");
                self.state.catalog_loaded(restaurants);
            }
            Err(e) => {
                let err = SessionError::CatalogLoad(e);
                warn!(error = %err, "Catalog load failed");
                self.state.catalog_failed(err.to_string());
            }
        }
    }

    /// Applies or discards a settled menu fetch, then wakes the caller that
    /// issued the select.
    fn handle_menu_settled(&mut self, outcome: MenuFetchOutcome) {
        let MenuFetchOutcome { token, result } = outcome;
        match result {
            Ok(menu) => {
                let count = menu.len();
                if self.state.menu_loaded(token, menu) {
                    info!(items = count, "Menu loaded; cart cleared");
                } else {
                    debug!(token = token.raw(), "Stale menu result discarded");
                }
            }
            Err(e) => {
                let err = SessionError::MenuLoad(e);
                if self.state.menu_failed(token, err.to_string()) {
                    warn!(error = %err, "Menu load failed; restaurant stays selected");
                } else {
                    debug!(token = token.raw(), "Stale menu failure discarded");
                }
            }
        }

        if let Some(respond_to) = self.pending_selects.remove(&token.raw()) {
            let _ = respond_to.send(Ok(self.state.snapshot()));
        }
    }

    /// Validates the precondition, submits the order, and reconciles the
    /// cart. An unmet precondition issues no request and changes nothing; a
    /// submission failure retains the cart for retry.
    async fn checkout(
        &mut self,
        backend: &Arc<dyn OrderingBackend>,
    ) -> Result<CheckoutOutcome, SessionError> {
        let Some(order) = self.state.build_order() else {
            debug!("Checkout unavailable; no active restaurant or empty cart");
            return Ok(CheckoutOutcome::NotReady);
        };

        info!(restaurant_id = %order.restaurant_id, lines = order.items.len(), "Submitting order");
        match backend.place_order(&order).await {
            Ok(receipt) => {
                self.state.order_placed();
                info!(total = receipt.total, "Order placed");
                Ok(CheckoutOutcome::Placed(receipt))
            }
            Err(e) => {
                let err = SessionError::OrderSubmit(e);
                warn!(error = %err, "Checkout failed; cart retained");
                Err(err)
            }
        }
    }
}
