//! Checkout engine
//!
//! The checkout engine is the storage backend for the checkout bridge. It persists pending checkout orders
//! (a customer record plus an order record with the cart and shipping payloads) and serves them back to the
//! payment-confirmation flow, joined with their customer.
//!
//! The crate is divided into two main sections:
//! 1. Database management and control ([`mod@db`]). SQLite is the supported backend. You should never need to
//!    access the database directly. Instead, use the public API provided by the engine. The exception is the
//!    data types used in the database, which are defined in the [`db_types`] module and are public.
//! 2. The engine public API ([`OrderFlowApi`]). The HTTP handlers only talk to this wrapper; backends implement
//!    the [`OrderStore`] trait to plug in underneath it.

mod api;
mod db;

pub mod db_types;
pub mod helpers;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use api::{OrderFlowApi, OrderFlowError};
pub use db::sqlite::SqliteDatabase;
pub use traits::{InsertedOrder, OrderStore, StoreError};
