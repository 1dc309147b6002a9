//! # Cart Ledger
//!
//! The order-assembly core: an ordered collection of [`CartLine`]s, all scoped
//! to the single active restaurant. The cart itself does not know which
//! restaurant that is — [`crate::session`] enforces the scoping by clearing
//! the cart on every successful restaurant switch.
//!
//! ## Invariants
//!
//! After every mutation:
//! - at most one line per menu-item identity (adding an existing item
//!   increments its quantity, preserving insertion order)
//! - every line's quantity is at least 1
//!
//! Totals are recomputed on every read. Prices are captured at add time and
//! never re-fetched, but quantities mutate, so a cached total would go stale.

use crate::model::{MenuItem, OrderItem};

/// One menu item plus a quantity. Identity is the underlying menu-item id.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    /// Captured from the menu item when the line was first added.
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }

    /// Flattens this line into the shape the order service expects.
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            menu_item_id: self.item_id.clone(),
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// The mutable collection of selected menu items for the current restaurant
/// session. Insertion order is preserved; incrementing an existing line never
/// reorders it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`. If a line for the item's identity already
    /// exists its quantity is incremented; otherwise a new quantity-1 line is
    /// appended, capturing the item's current price.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_item(item));
        }
        debug_assert!(self.invariants_hold());
    }

    /// Deletes the whole line with the given identity. No-op if absent.
    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
        debug_assert!(self.invariants_hold());
    }

    /// Sum of `price × quantity` across all lines, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.price * f64::from(l.quantity))
            .sum()
    }

    /// Empties all lines. Invoked on restaurant switch and on successful
    /// checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Flattens the cart into order-service line items.
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines.iter().map(CartLine::to_order_item).collect()
    }

    /// Distinct identities, every quantity >= 1.
    fn invariants_hold(&self) -> bool {
        let distinct = self
            .lines
            .iter()
            .enumerate()
            .all(|(i, l)| self.lines[..i].iter().all(|p| p.item_id != l.item_id));
        distinct && self.lines.iter().all(|l| l.quantity >= 1)
    }
}
