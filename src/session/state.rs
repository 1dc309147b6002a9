//! # Session State Machine
//!
//! [`SessionState`] is the single container for everything the storefront
//! knows: the view mode, the fetched catalog, the active restaurant and its
//! menu, and the cart. Every transition is a plain synchronous function from
//! the current state and an event to the next state, so the whole ordering
//! flow can be unit-tested deterministically without a rendering surface or
//! a network.
//!
//! ## View transitions
//!
//! ```text
//! Loading ──catalog ok──▶ Browsing ──select──▶ SelectingRestaurant
//!    │                       ▲                        │
//!    └─catalog err──▶ Error  └───────back─────────┐   │ menu settled
//!                                                 │   ▼ (ok or err)
//!                                        ViewingRestaurant
//! ```
//!
//! `Error` arises only from a catalog load failing with no restaurant
//! selected, and only a fresh load leaves it. A reload failing while a
//! restaurant is active surfaces as a `banner` and the detail view stays,
//! same as a reload succeeding keeps it.
//!
//! Selection is two-phase: `begin_select` records the optimistic choice and
//! hands back a [`SelectToken`]; the menu result is applied later, and only
//! if the token is still current. A stale token means a newer select (or a
//! `back`) superseded the fetch, and the result is discarded.
//!
//! A failed menu fetch never enters [`ViewState::Error`]: the restaurant
//! stays selected and the failure surfaces as a `banner`, so the detail view
//! degrades in place. `Error` is reserved for catalog loads and is left only
//! by a fresh load.

use crate::cart::{Cart, CartLine};
use crate::model::{MenuItem, OrderRequest, Restaurant};

/// The coarse UI mode, gating which user actions are meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Catalog fetch in flight; nothing to interact with yet.
    Loading,
    /// Catalog fetch failed. Only a fresh load can leave this state.
    Error(String),
    /// Catalog available, no restaurant selected.
    Browsing,
    /// A restaurant was chosen and its menu fetch has not settled yet.
    SelectingRestaurant,
    /// A restaurant is active with its menu fetch settled.
    ViewingRestaurant,
}

/// Monotonic token identifying one `begin_select` call. A menu result is
/// applied only if its token is still the latest issued (last-write-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectToken(u64);

impl SelectToken {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Cloneable read model handed to callers after every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub view: ViewState,
    pub restaurants: Vec<Restaurant>,
    pub active: Option<Restaurant>,
    pub menu: Vec<MenuItem>,
    pub cart: Vec<CartLine>,
    pub cart_total: f64,
    /// Non-fatal, user-visible degradation: a menu load failure, or a
    /// catalog reload failing while a restaurant is viewed.
    pub banner: Option<String>,
}

/// The explicit state container for the ordering session.
#[derive(Debug)]
pub struct SessionState {
    view: ViewState,
    restaurants: Vec<Restaurant>,
    active: Option<Restaurant>,
    menu: Vec<MenuItem>,
    cart: Cart,
    /// Which restaurant the cart's lines belong to. Tracked separately from
    /// `active`: during a pending or failed switch the two diverge, and the
    /// old lines must not be submitted (or added to) under the new id.
    cart_restaurant: Option<String>,
    banner: Option<String>,
    select_epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            view: ViewState::Loading,
            restaurants: Vec::new(),
            active: None,
            menu: Vec::new(),
            cart: Cart::new(),
            cart_restaurant: None,
            banner: None,
            select_epoch: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn active(&self) -> Option<&Restaurant> {
        self.active.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // --- Catalog ---

    /// A catalog fetch was issued.
    pub fn begin_load(&mut self) {
        self.banner = None;
        if self.active.is_none() {
            self.view = ViewState::Loading;
        }
    }

    /// Catalog fetch succeeded; the catalog is replaced wholesale.
    /// An active restaurant selection survives a reload (seeding while
    /// viewing a menu does not kick the user back to the list).
    pub fn catalog_loaded(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
        if self.active.is_none() {
            self.view = ViewState::Browsing;
        }
    }

    /// Catalog fetch failed. With no selection this is fatal for the view
    /// and only another load leaves `Error`; a reload failing while a
    /// restaurant is active surfaces as a banner instead, so `back()` can
    /// never be an exit from `Error`.
    pub fn catalog_failed(&mut self, message: impl Into<String>) {
        if self.active.is_some() {
            self.banner = Some(message.into());
        } else {
            self.view = ViewState::Error(message.into());
        }
    }

    // --- Selection ---

    /// Records the optimistic restaurant choice and starts the two-phase
    /// selection. The cart is deliberately left alone here: it is cleared
    /// only once the new menu actually arrives.
    pub fn begin_select(&mut self, restaurant: Restaurant) -> SelectToken {
        self.active = Some(restaurant);
        self.menu.clear();
        self.banner = None;
        self.view = ViewState::SelectingRestaurant;
        self.select_epoch += 1;
        SelectToken(self.select_epoch)
    }

    /// Applies a fetched menu if `token` is still current. Clears the cart
    /// unconditionally on success: the cart may never hold items from a
    /// previously viewed restaurant. Returns whether the result was applied.
    pub fn menu_loaded(&mut self, token: SelectToken, menu: Vec<MenuItem>) -> bool {
        if token.0 != self.select_epoch {
            return false;
        }
        self.menu = menu;
        self.clear_cart();
        self.view = ViewState::ViewingRestaurant;
        true
    }

    /// Records a failed menu fetch if `token` is still current. The
    /// restaurant stays selected and the failure is reported, not rolled
    /// back; the cart is retained. Returns whether the failure was applied.
    pub fn menu_failed(&mut self, token: SelectToken, message: impl Into<String>) -> bool {
        if token.0 != self.select_epoch {
            return false;
        }
        self.banner = Some(message.into());
        self.view = ViewState::ViewingRestaurant;
        true
    }

    /// Leaves the detail view. The cart is kept: it dies only on a
    /// successful new selection or checkout, so an accidental back-tap
    /// within the same restaurant session loses nothing. Advancing the
    /// epoch invalidates any menu fetch still in flight.
    pub fn back(&mut self) {
        if self.active.is_none() {
            return;
        }
        self.active = None;
        self.menu.clear();
        self.banner = None;
        self.select_epoch += 1;
        self.view = ViewState::Browsing;
    }

    // --- Cart ---

    /// Adds one unit of `item` to the cart. Ignored when no restaurant is
    /// active, or when the cart still holds another restaurant's lines
    /// because a switch is pending or its menu fetch failed.
    pub fn add_item(&mut self, item: &MenuItem) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        if !self.cart.is_empty() && self.cart_restaurant.as_deref() != Some(active.id.as_str()) {
            return false;
        }
        self.cart_restaurant = Some(active.id.clone());
        self.cart.add(item);
        true
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.cart.remove(item_id);
    }

    // --- Checkout ---

    /// Checkout needs an active restaurant and a non-empty cart whose lines
    /// belong to it; otherwise it is silently unavailable rather than an
    /// error. The ownership check matters between `begin_select` of another
    /// restaurant and its menu settling (or after that fetch failed): the
    /// retained cart belongs to the previous restaurant and must not be
    /// submitted under the new id.
    pub fn checkout_ready(&self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        !self.cart.is_empty() && self.cart_restaurant.as_deref() == Some(active.id.as_str())
    }

    /// Serializes the current cart into an order request for the active
    /// restaurant, or `None` when checkout is not available.
    pub fn build_order(&self) -> Option<OrderRequest> {
        if !self.checkout_ready() {
            return None;
        }
        let restaurant = self.active.as_ref()?;
        Some(OrderRequest::guest(
            restaurant.id.clone(),
            self.cart.to_order_items(),
        ))
    }

    /// The order service accepted the order; the cart's job is done.
    pub fn order_placed(&mut self) {
        self.clear_cart();
    }

    fn clear_cart(&mut self) {
        self.cart.clear();
        self.cart_restaurant = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view: self.view().clone(),
            restaurants: self.restaurants.clone(),
            active: self.active.clone(),
            menu: self.menu.clone(),
            cart: self.cart.lines().to_vec(),
            cart_total: self.cart.total(),
            banner: self.banner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItem, Restaurant};

    fn restaurant(id: &str) -> Restaurant {
        Restaurant::new(id, format!("Restaurant {id}"), "Test", 4.0, 30)
    }

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem::new(id, format!("Item {id}"), price)
    }

    #[test]
    fn starts_loading_then_browses_on_catalog() {
        let mut state = SessionState::new();
        assert_eq!(state.view(), &ViewState::Loading);

        state.catalog_loaded(vec![restaurant("r1")]);
        assert_eq!(state.view(), &ViewState::Browsing);
    }

    #[test]
    fn catalog_failure_is_sticky_until_reload() {
        let mut state = SessionState::new();
        state.catalog_failed("Failed to load restaurants");
        assert_eq!(
            state.view(),
            &ViewState::Error("Failed to load restaurants".into())
        );

        // A later successful load is the only way out.
        state.begin_load();
        state.catalog_loaded(vec![restaurant("r1")]);
        assert_eq!(state.view(), &ViewState::Browsing);
    }

    #[test]
    fn selection_is_two_phase() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1")]);

        let token = state.begin_select(restaurant("r1"));
        assert_eq!(state.view(), &ViewState::SelectingRestaurant);
        assert_eq!(state.active().unwrap().id, "r1");

        assert!(state.menu_loaded(token, vec![item("i1", 5.0)]));
        assert_eq!(state.view(), &ViewState::ViewingRestaurant);
        assert_eq!(state.snapshot().menu.len(), 1);
    }

    #[test]
    fn successful_selection_clears_cart() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1"), restaurant("r2")]);

        let t1 = state.begin_select(restaurant("r1"));
        state.menu_loaded(t1, vec![item("i1", 5.0)]);
        state.add_item(&item("i1", 5.0));
        assert!(!state.cart().is_empty());

        let t2 = state.begin_select(restaurant("r2"));
        state.menu_loaded(t2, vec![item("i9", 7.0)]);

        assert!(state.cart().is_empty());
        assert_eq!(state.active().unwrap().id, "r2");
    }

    #[test]
    fn stale_menu_result_is_discarded() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1"), restaurant("r2")]);

        let slow = state.begin_select(restaurant("r1"));
        let fast = state.begin_select(restaurant("r2"));

        // The fast later select settles first.
        assert!(state.menu_loaded(fast, vec![item("i2", 3.0)]));
        // The slow earlier response arrives afterwards and must not win.
        assert!(!state.menu_loaded(slow, vec![item("i1", 9.0)]));

        assert_eq!(state.active().unwrap().id, "r2");
        assert_eq!(state.snapshot().menu[0].id, "i2");
    }

    #[test]
    fn menu_failure_degrades_in_place() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1")]);

        let t1 = state.begin_select(restaurant("r1"));
        state.menu_loaded(t1, vec![item("i1", 5.0)]);
        state.add_item(&item("i1", 5.0));

        let t2 = state.begin_select(restaurant("r1"));
        assert!(state.menu_failed(t2, "Failed to load menu"));

        // Still in the detail view, restaurant still selected, cart intact.
        assert_eq!(state.view(), &ViewState::ViewingRestaurant);
        assert_eq!(state.active().unwrap().id, "r1");
        assert_eq!(state.snapshot().banner.as_deref(), Some("Failed to load menu"));
        assert!(!state.cart().is_empty());
    }

    #[test]
    fn back_keeps_cart_and_invalidates_inflight_fetch() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1")]);

        let t1 = state.begin_select(restaurant("r1"));
        state.menu_loaded(t1, vec![item("i1", 5.0)]);
        state.add_item(&item("i1", 5.0));

        let inflight = state.begin_select(restaurant("r1"));
        state.back();

        assert_eq!(state.view(), &ViewState::Browsing);
        assert!(state.active().is_none());
        assert!(!state.cart().is_empty(), "back must not clear the cart");
        assert!(
            !state.menu_loaded(inflight, vec![item("i2", 2.0)]),
            "fetch completing after back must be discarded"
        );
        assert_eq!(state.view(), &ViewState::Browsing);
    }

    #[test]
    fn add_item_without_active_restaurant_is_ignored() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1")]);

        assert!(!state.add_item(&item("i1", 5.0)));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn checkout_gate_and_order_shape() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1")]);
        assert!(!state.checkout_ready());
        assert!(state.build_order().is_none());

        let t = state.begin_select(restaurant("r1"));
        state.menu_loaded(t, vec![item("i1", 5.0)]);
        state.add_item(&item("i1", 5.0));
        state.add_item(&item("i1", 5.0));

        let order = state.build_order().expect("checkout should be available");
        assert_eq!(order.restaurant_id, "r1");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);

        state.order_placed();
        assert!(state.cart().is_empty());
        assert!(!state.checkout_ready());
    }

    #[test]
    fn back_cannot_leave_error() {
        let mut state = SessionState::new();
        state.begin_load();
        state.catalog_failed("Failed to load restaurants");

        state.back();
        assert!(matches!(state.view(), ViewState::Error(_)));
    }

    #[test]
    fn reload_failure_while_viewing_degrades_in_place() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1")]);
        let t = state.begin_select(restaurant("r1"));
        state.menu_loaded(t, vec![item("i1", 5.0)]);

        state.begin_load();
        state.catalog_failed("Failed to load restaurants");

        // The failure is a banner, never `Error`: the restaurant stays
        // selected and the stale catalog stays usable.
        assert_eq!(state.view(), &ViewState::ViewingRestaurant);
        assert_eq!(state.active().unwrap().id, "r1");
        assert_eq!(
            state.snapshot().banner.as_deref(),
            Some("Failed to load restaurants")
        );
        assert_eq!(state.snapshot().restaurants.len(), 1);

        state.back();
        assert_eq!(state.view(), &ViewState::Browsing);
    }

    #[test]
    fn checkout_requires_cart_to_match_active_restaurant() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1"), restaurant("r2")]);
        let t = state.begin_select(restaurant("r1"));
        state.menu_loaded(t, vec![item("i1", 5.0)]);
        state.add_item(&item("i1", 5.0));
        assert!(state.checkout_ready());

        // Switch pending: the cart still belongs to r1.
        let t2 = state.begin_select(restaurant("r2"));
        assert!(!state.checkout_ready());
        assert!(state.build_order().is_none());

        // The failed switch keeps the old cart; still not submittable
        // under r2.
        state.menu_failed(t2, "Failed to load menu");
        assert!(!state.checkout_ready());
        assert!(!state.cart().is_empty());
    }

    #[test]
    fn add_into_another_restaurants_cart_is_ignored() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1"), restaurant("r2")]);
        let t = state.begin_select(restaurant("r1"));
        state.menu_loaded(t, vec![item("i1", 5.0)]);
        state.add_item(&item("i1", 5.0));

        let t2 = state.begin_select(restaurant("r2"));
        state.menu_failed(t2, "Failed to load menu");

        assert!(!state.add_item(&item("i9", 2.0)));
        assert_eq!(state.cart().len(), 1);

        // Once the old lines are gone the cart is adoptable again.
        state.remove_item("i1");
        assert!(state.add_item(&item("i9", 2.0)));
        assert!(state.checkout_ready());
    }

    #[test]
    fn catalog_reload_survives_active_selection() {
        let mut state = SessionState::new();
        state.catalog_loaded(vec![restaurant("r1")]);
        let t = state.begin_select(restaurant("r1"));
        state.menu_loaded(t, vec![item("i1", 5.0)]);

        // Seed-and-reload while viewing a menu replaces the catalog but
        // keeps the detail view.
        state.begin_load();
        state.catalog_loaded(vec![restaurant("r1"), restaurant("r2")]);

        assert_eq!(state.view(), &ViewState::ViewingRestaurant);
        assert_eq!(state.snapshot().restaurants.len(), 2);
    }
}
