use serde::{Deserialize, Serialize};

/// The order payload for Shopify's Admin order-creation endpoint. This is built on demand from a stored order
/// or a direct checkout submission and is never persisted.
///
/// The two builders in the server populate it slightly differently. The payment-confirmation path carries
/// variant ids and first/last names on the shipping address and writes `country_code`; the direct path carries
/// neither and writes `country`. The optional fields keep both shapes expressible without serializing nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShopifyOrder {
    pub line_items: Vec<LineItem>,
    pub customer: ShopifyCustomer,
    pub shipping_address: ShopifyShippingAddress,
    pub financial_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    pub quantity: u32,
    pub title: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopifyCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopifyShippingAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub address1: String,
    pub city: String,
    pub province: String,
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}
