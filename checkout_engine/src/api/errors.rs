use thiserror::Error;

use crate::{db_types::OrderId, traits::StoreError};

#[derive(Debug, Error)]
pub enum OrderFlowError {
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),
    #[error(transparent)]
    StoreError(#[from] StoreError),
}
