//! # Backend Gateway
//!
//! The seam between the ordering state machine and the external
//! restaurant/menu/order service. The session only ever talks to the
//! [`OrderingBackend`] trait; production wires in the reqwest-based
//! [`HttpBackend`], tests wire in the scripted [`MockBackend`].
//!
//! The HTTP contract (consumed, never reimplemented):
//!
//! | Operation        | Method/Path                   |
//! |------------------|-------------------------------|
//! | List restaurants | GET `/restaurants`            |
//! | Get menu         | GET `/restaurants/{id}/menu`  |
//! | Place order      | POST `/orders`                |
//! | Seed demo data   | POST `/seed`                  |

pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use config::BackendConfig;
pub use error::BackendError;
pub use http::HttpBackend;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::model::{MenuItem, OrderReceipt, OrderRequest, Restaurant};

/// Operations the storefront needs from the backend service.
///
/// Every method maps to exactly one network call; retries and cancellation
/// are deliberately absent (a failure is terminal for that attempt and needs
/// a new user-triggered action).
#[async_trait]
pub trait OrderingBackend: Send + Sync + 'static {
    /// Fetches the full restaurant catalog.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, BackendError>;

    /// Fetches the menu for one restaurant.
    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, BackendError>;

    /// Submits an assembled order, returning the service's receipt.
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, BackendError>;

    /// Populates the backend with demo data. Idempotent on the server side;
    /// callers ignore the outcome beyond logging.
    async fn seed_demo_data(&self) -> Result<(), BackendError>;
}
