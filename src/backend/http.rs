//! Reqwest-based backend gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::config::BackendConfig;
use super::error::BackendError;
use super::OrderingBackend;
use crate::model::{MenuItem, OrderReceipt, OrderRequest, Restaurant};

/// Production [`OrderingBackend`] speaking JSON over HTTP.
///
/// Timeouts live here, in the transport layer; the session above issues no
/// retries and has no cancellation primitive for in-flight requests.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a backend against the configured base URL.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(3))
            .build()
            .map_err(BackendError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_connect() {
            BackendError::Connection(self.base_url.clone())
        } else {
            BackendError::Http(e)
        }
    }
}

#[async_trait]
impl OrderingBackend for HttpBackend {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, BackendError> {
        let url = self.url("/restaurants");
        debug!(%url, "GET restaurants");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, BackendError> {
        let url = self.url(&format!("/restaurants/{restaurant_id}/menu"));
        debug!(%url, "GET menu");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, BackendError> {
        let url = self.url("/orders");
        debug!(%url, restaurant_id = %order.restaurant_id, items = order.items.len(), "POST order");
        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn seed_demo_data(&self) -> Result<(), BackendError> {
        let url = self.url("/seed");
        debug!(%url, "POST seed");
        self.client
            .post(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?
            .error_for_status()?;
        Ok(())
    }
}
