use std::fmt::Debug;

use log::*;

use crate::{
    api::OrderFlowError,
    db_types::{NewOrder, OrderId, OrderRecord},
    traits::{InsertedOrder, OrderStore},
};

/// `OrderFlowApi` is the API the HTTP handlers talk to for storing checkout orders and resolving them again
/// when a payment confirmation arrives.
pub struct OrderFlowApi<B> {
    db: B,
}

impl<B> Debug for OrderFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B> OrderFlowApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> OrderFlowApi<B>
where B: OrderStore
{
    /// Persist a brand-new checkout order (customer row plus pending order row, atomically).
    pub async fn save_new_order(&self, order: NewOrder) -> Result<InsertedOrder, OrderFlowError> {
        let ids = self.db.insert_order(order).await?;
        debug!("🔄️📦️ Intake complete. Order row #{} references customer #{}", ids.order_id, ids.customer_id);
        Ok(ids)
    }

    /// Resolve a stored order for a payment confirmation. A missing order is an error here: a confirmation for
    /// an id this store has never seen cannot be forwarded anywhere.
    pub async fn order_for_payment(&self, order_id: &OrderId) -> Result<OrderRecord, OrderFlowError> {
        let record = self
            .db
            .fetch_order_by_order_id(order_id)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))?;
        trace!("🔄️💰️ Order {} resolved to row #{} (customer {})", order_id, record.id, record.customer_email);
        Ok(record)
    }
}
