//! Translation from checkout/bridge order types to Shopify Admin order payloads.
//!
//! There are two builders here and they are deliberately not the same. The payment
//! confirmation path forwards the order that was stored at intake time: it trusts the
//! stored variant ids (stripping the storefront gid prefix) and always orders a quantity
//! of one per line, since the storefront sells single-unit drops. The direct path
//! forwards whatever the checkout submitted: quantities are propagated as-is and variant
//! ids are not sent, so Shopify treats the lines as custom items.

use checkout_engine::db_types::OrderRecord;
use shopify_api::{
    helpers::{split_full_name, strip_variant_gid},
    LineItem,
    NewShopifyOrder,
    ShopifyCustomer,
    ShopifyShippingAddress,
};

use crate::data_objects::OrderSubmission;

/// The financial status stamped on every order the bridge creates. Orders are only
/// forwarded once payment has been detected, so they are always created as paid.
pub const FINANCIAL_STATUS_PAID: &str = "paid";

/// Builds the Shopify order for a stored order that has just been paid.
pub fn shopify_order_from_record(record: &OrderRecord) -> NewShopifyOrder {
    let (first_name, last_name) = split_full_name(&record.shipping_info.name);
    let line_items = record
        .cart_items
        .iter()
        .map(|item| LineItem {
            variant_id: item.variant_id.as_deref().map(|id| strip_variant_gid(id).to_string()),
            quantity: 1,
            title: item.title.clone(),
            price: item.price.clone(),
        })
        .collect();
    NewShopifyOrder {
        line_items,
        customer: ShopifyCustomer {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            email: record.shipping_info.email.clone(),
        },
        shipping_address: ShopifyShippingAddress {
            first_name: Some(first_name),
            last_name: Some(last_name),
            address1: record.shipping_info.address.clone(),
            city: record.shipping_info.city.clone(),
            province: record.shipping_info.state.clone(),
            zip: record.shipping_info.zip.clone(),
            country: None,
            country_code: Some(record.shipping_info.country.clone()),
        },
        financial_status: FINANCIAL_STATUS_PAID.to_string(),
    }
}

/// Builds the Shopify order for a checkout payload forwarded directly, without going
/// through the order store.
pub fn shopify_order_from_submission(submission: &OrderSubmission) -> NewShopifyOrder {
    let line_items = submission
        .cart_items
        .iter()
        .map(|item| LineItem {
            variant_id: None,
            quantity: item.quantity.unwrap_or(1),
            title: item.title.clone(),
            price: item.price.clone(),
        })
        .collect();
    let (first_name, last_name) = split_full_name(&submission.shipping_info.name);
    NewShopifyOrder {
        line_items,
        customer: ShopifyCustomer { first_name, last_name, email: submission.shipping_info.email.clone() },
        shipping_address: ShopifyShippingAddress {
            first_name: None,
            last_name: None,
            address1: submission.shipping_info.address.clone(),
            city: submission.shipping_info.city.clone(),
            province: submission.shipping_info.state.clone(),
            zip: submission.shipping_info.zip.clone(),
            country: Some(submission.shipping_info.country.clone()),
            country_code: None,
        },
        financial_status: FINANCIAL_STATUS_PAID.to_string(),
    }
}
