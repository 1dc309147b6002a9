//! Domain types mirroring the backend's JSON contract.
//!
//! Everything in here is a plain serde-derived data type; the ordering rules
//! that act on these types live in [`crate::cart`] and [`crate::session`].

pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use menu_item::MenuItem;
pub use order::{OrderItem, OrderReceipt, OrderRequest, GUEST_ADDRESS, GUEST_NAME, GUEST_PHONE};
pub use restaurant::Restaurant;
