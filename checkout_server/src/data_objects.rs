//! Request payload definitions for the JSON endpoints.

use checkout_engine::{
    db_types::{CartItem, NewOrder, OrderId, ShippingInfo},
    helpers::string_or_number,
};
use serde::{Deserialize, Serialize};

/// The charge event type that indicates a payment has been detected on-chain.
pub const CHARGE_PENDING: &str = "charge:pending";

/// An order as submitted by the storefront checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub order_id: OrderId,
    #[serde(deserialize_with = "string_or_number")]
    pub total: String,
    pub shipping_info: ShippingInfo,
    pub cart_items: Vec<CartItem>,
}

impl From<OrderSubmission> for NewOrder {
    fn from(submission: OrderSubmission) -> Self {
        Self {
            order_id: submission.order_id,
            total: submission.total,
            shipping_info: submission.shipping_info,
            cart_items: submission.cart_items,
        }
    }
}

/// The Coinbase Commerce webhook envelope. Only the fields the bridge cares about are
/// modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinbaseWebhook {
    #[serde(default)]
    pub event: Option<ChargeEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: Option<ChargeData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeData {
    #[serde(default)]
    pub metadata: Option<ChargeMetadata>,
}

/// Charge metadata is set by the checkout when it creates the charge, so a well-formed
/// `charge:pending` event always carries the order id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeMetadata {
    #[serde(default)]
    pub order_id: Option<OrderId>,
}

impl CoinbaseWebhook {
    /// Extracts the order id from a charge event, if the envelope carries one.
    pub fn order_id(&self) -> Option<&OrderId> {
        self.event.as_ref()?.data.as_ref()?.metadata.as_ref()?.order_id.as_ref()
    }
}
