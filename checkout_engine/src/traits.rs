use thiserror::Error;

use crate::db_types::{Customer, NewOrder, OrderId, OrderRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Could not (de)serialize order data. {0}")]
    DataError(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::DataError(e.to_string())
    }
}

/// The row ids generated by a successful intake insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedOrder {
    pub order_id: i64,
    pub customer_id: i64,
}

/// Storage backend for the checkout bridge.
///
/// Backends persist checkout submissions and serve them back to the payment-confirmation flow. Nothing in this
/// trait enforces uniqueness of the caller-supplied order id; lookups return the most recent row for an id.
#[allow(async_fn_in_trait)]
pub trait OrderStore {
    /// Persist a new checkout order. A customer row is created from the shipping info and an order row
    /// referencing it follows, with status `pending`. The two inserts share one transaction: the customer and
    /// the order are created together or not at all.
    async fn insert_order(&self, order: NewOrder) -> Result<InsertedOrder, StoreError>;

    /// Fetch the most recent order with the given (normalized) order id, joined with its customer.
    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<OrderRecord>, StoreError>;

    /// Fetch a customer row by its generated id.
    async fn fetch_customer(&self, customer_id: i64) -> Result<Option<Customer>, StoreError>;
}
