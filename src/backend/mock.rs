//! # Mock Backend & Testing Guide
//!
//! [`MockBackend`] implements the same [`OrderingBackend`] trait as the
//! production [`HttpBackend`](super::HttpBackend) but operates entirely
//! in-memory. It lets tests script responses, inject failures that are hard
//! to reproduce against a real server (timeouts, partial outages), slow a
//! menu fetch down to provoke the stale-select race, and assert on exactly
//! which calls were issued.
//!
//! ```ignore
//! let backend = MockBackend::new();
//! backend.set_restaurants(vec![Restaurant::new("r1", "Trattoria", "Italian", 4.6, 25)]);
//! backend.set_menu("r1", vec![MenuItem::new("i1", "Margherita", 9.0)]);
//! backend.fail_orders(true);
//!
//! let storefront = Storefront::with_backend(Arc::new(backend.clone()));
//! // drive the session, then:
//! assert_eq!(backend.calls().orders, 1);
//! assert!(backend.placed_orders().is_empty());
//! ```
//!
//! The handle is cheaply cloneable; keep one clone in the test and hand the
//! other to the session so scripted responses can change mid-test.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::error::BackendError;
use super::OrderingBackend;
use crate::model::{MenuItem, OrderReceipt, OrderRequest, Restaurant};

/// Per-endpoint call counters, for asserting "no network call was issued".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub catalog: usize,
    pub menu: usize,
    pub orders: usize,
    pub seed: usize,
}

#[derive(Default)]
struct Inner {
    restaurants: Vec<Restaurant>,
    fail_catalog: bool,
    menus: HashMap<String, Vec<MenuItem>>,
    failed_menus: HashSet<String>,
    menu_delays: HashMap<String, Duration>,
    order_total: Option<f64>,
    fail_orders: bool,
    fail_seed: bool,
    placed_orders: Vec<OrderRequest>,
    calls: CallCounts,
}

/// Scripted in-memory [`OrderingBackend`] for tests.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the catalog returned by `list_restaurants`.
    pub fn set_restaurants(&self, restaurants: Vec<Restaurant>) {
        self.inner.lock().unwrap().restaurants = restaurants;
    }

    /// Makes `list_restaurants` fail until switched back off.
    pub fn fail_catalog(&self, fail: bool) {
        self.inner.lock().unwrap().fail_catalog = fail;
    }

    /// Scripts the menu for one restaurant.
    pub fn set_menu(&self, restaurant_id: impl Into<String>, menu: Vec<MenuItem>) {
        self.inner.lock().unwrap().menus.insert(restaurant_id.into(), menu);
    }

    /// Makes `fetch_menu` for one restaurant fail until switched back off.
    pub fn fail_menu(&self, restaurant_id: impl Into<String>, fail: bool) {
        let mut inner = self.inner.lock().unwrap();
        let id = restaurant_id.into();
        if fail {
            inner.failed_menus.insert(id);
        } else {
            inner.failed_menus.remove(&id);
        }
    }

    /// Delays `fetch_menu` for one restaurant, to simulate a slow response
    /// racing a faster later one.
    pub fn set_menu_delay(&self, restaurant_id: impl Into<String>, delay: Duration) {
        self.inner
            .lock()
            .unwrap()
            .menu_delays
            .insert(restaurant_id.into(), delay);
    }

    /// Scripts the total the order service reports. When unset, the mock
    /// sums the submitted lines.
    pub fn set_order_total(&self, total: f64) {
        self.inner.lock().unwrap().order_total = Some(total);
    }

    /// Makes `place_order` fail until switched back off.
    pub fn fail_orders(&self, fail: bool) {
        self.inner.lock().unwrap().fail_orders = fail;
    }

    /// Makes `seed_demo_data` fail until switched back off.
    pub fn fail_seed(&self, fail: bool) {
        self.inner.lock().unwrap().fail_seed = fail;
    }

    /// Every order request the session actually submitted.
    pub fn placed_orders(&self) -> Vec<OrderRequest> {
        self.inner.lock().unwrap().placed_orders.clone()
    }

    pub fn calls(&self) -> CallCounts {
        self.inner.lock().unwrap().calls
    }
}

#[async_trait]
impl OrderingBackend for MockBackend {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.catalog += 1;
        if inner.fail_catalog {
            return Err(BackendError::Unavailable("catalog".into()));
        }
        Ok(inner.restaurants.clone())
    }

    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, BackendError> {
        let (delay, result) = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.menu += 1;
            let delay = inner.menu_delays.get(restaurant_id).copied();
            let result = if inner.failed_menus.contains(restaurant_id) {
                Err(BackendError::Unavailable(format!("menu {restaurant_id}")))
            } else {
                Ok(inner.menus.get(restaurant_id).cloned().unwrap_or_default())
            };
            (delay, result)
        };
        // Sleep outside the lock so a slow fetch never blocks other calls.
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        result
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.orders += 1;
        if inner.fail_orders {
            return Err(BackendError::Unavailable("orders".into()));
        }
        inner.placed_orders.push(order.clone());
        let total = inner.order_total.unwrap_or_else(|| {
            order
                .items
                .iter()
                .map(|i| i.price * f64::from(i.quantity))
                .sum()
        });
        Ok(OrderReceipt { total })
    }

    async fn seed_demo_data(&self) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.seed += 1;
        if inner.fail_seed {
            return Err(BackendError::Unavailable("seed".into()));
        }
        Ok(())
    }
}
