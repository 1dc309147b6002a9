//! # QuickBite Client
//!
//! > **A storefront ordering client built on message-passing state.**
//!
//! This crate implements the client side of a restaurant storefront:
//! browsing a catalog, inspecting menus, assembling a cart, and submitting
//! the order to a backend service. All ordering state lives in a single
//! actor that processes one event at a time, so the cart and view-state
//! invariants hold at every observable point without any locking.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why an actor for UI state?
//!
//! A storefront is event-driven by nature: every mutation is a reaction to a
//! completed network call or a user action. Funnelling all of them through
//! one sequential loop gives:
//! - **Isolated state**: the session owns its data; callers only see
//!   immutable snapshots.
//! - **No races**: overlapping menu fetches are serialized through the loop
//!   and resolved last-write-wins with select tokens.
//! - **Deterministic tests**: the transition logic is pure and synchronous;
//!   the async shell around it is thin.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Serde-derived types mirroring the backend's JSON contract: restaurants,
//! menu items, order requests and receipts.
//!
//! ### 2. The Ledger ([`cart`])
//! The cart: one line per menu item, quantities ≥ 1, totals recomputed on
//! every read. The invariants with actual teeth live here.
//!
//! ### 3. The Gateway ([`backend`])
//! The [`OrderingBackend`](backend::OrderingBackend) trait with a reqwest
//! implementation for production and a scripted mock for tests.
//!
//! ### 4. The Core ([`session`])
//! The ordering state machine: pure transitions in
//! [`SessionState`](session::SessionState), the sequential
//! [`SessionActor`](session::SessionActor), and the cloneable
//! [`SessionClient`](session::SessionClient).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) wires backend and actor together
//! and handles graceful shutdown; `setup_tracing` configures logging.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use quickbite_client::backend::BackendConfig;
//! use quickbite_client::lifecycle::{setup_tracing, Storefront};
//!
//! setup_tracing();
//! let storefront = Storefront::connect(BackendConfig::from_env())?;
//!
//! let snapshot = storefront.session.load().await?;
//! let first = snapshot.restaurants[0].clone();
//! let snapshot = storefront.session.select(first).await?;
//! storefront.session.add_item(snapshot.menu[0].clone()).await?;
//! let outcome = storefront.session.checkout().await?;
//!
//! storefront.shutdown().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod backend;
pub mod cart;
pub mod lifecycle;
pub mod model;
pub mod session;
