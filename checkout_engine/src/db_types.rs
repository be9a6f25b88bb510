use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use log::error;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, Type};

use crate::helpers::string_or_number;

//--------------------------------------        OrderId        ---------------------------------------------------------
/// The caller-supplied order identifier. Checkout front-ends hand these over inconsistently: sometimes as a
/// string, sometimes as a JSON number that picks up a fractional zero on the way (`12345.0`). All identifiers
/// are normalized on construction so that the intake and confirmation paths compare the same value.
#[derive(Debug, Clone, PartialEq, Eq, Type, Serialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Strips a trailing all-zero fractional part. Only `\.0+$` matches, so `12345.0` and `12345.000` become
    /// `12345`, while `12345.50` and `12345.10` are left alone.
    pub fn normalized(raw: &str) -> Self {
        let re = Regex::new(r"\.0+$").unwrap();
        Self(re.replace(raw, "").into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalized(s))
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let raw = string_or_number(deserializer)?;
        Ok(Self::normalized(&raw))
    }
}

//--------------------------------------   OrderStatusType     ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusType {
    /// The order has been stored and no payment confirmation has been seen yet. This is the only status the
    /// intake path ever writes.
    Pending,
    /// A Shopify order has been created downstream for this order. Reserved for a future duplicate-delivery
    /// guard; nothing writes it yet.
    Forwarded,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Pending => write!(f, "pending"),
            OrderStatusType::Forwarded => write!(f, "forwarded"),
        }
    }
}

impl FromStr for OrderStatusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatusType::Pending),
            "forwarded" => Ok(OrderStatusType::Forwarded),
            s => Err(format!("Invalid order status: {s}")),
        }
    }
}

impl From<String> for OrderStatusType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|e| {
            error!("{e}. Defaulting to pending");
            OrderStatusType::Pending
        })
    }
}

//--------------------------------------     ShippingInfo      ---------------------------------------------------------
/// The shipping details a checkout submission carries. Stored verbatim as a JSON column on the order, and also
/// flattened into the customer row at intake time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub email: String,
}

//--------------------------------------       CartItem        ---------------------------------------------------------
/// A single cart line as submitted by the checkout. The variant id is only present for carts built against a
/// Shopify catalogue; quantity is optional because some front-ends omit it for single-item lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "variantId", default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    pub title: String,
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default)]
    pub quantity: Option<u32>,
}

//--------------------------------------       Customer        ---------------------------------------------------------
#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------       NewOrder        ---------------------------------------------------------
/// A checkout submission ready for persistence. One customer row and one order row are created from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub order_id: OrderId,
    #[serde(deserialize_with = "string_or_number")]
    pub total: String,
    pub shipping_info: ShippingInfo,
    pub cart_items: Vec<CartItem>,
}

//--------------------------------------      OrderRecord      ---------------------------------------------------------
/// A stored order joined with its customer, as returned by the confirmation lookup.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: i64,
    pub customer_id: i64,
    pub order_id: OrderId,
    pub total: String,
    pub status: OrderStatusType,
    pub cart_items: Vec<CartItem>,
    pub shipping_info: ShippingInfo,
    /// The email on the joined customer row. Note that the Shopify transform reads the email from the shipping
    /// info, matching the behaviour the storefront relies on.
    pub customer_email: String,
    pub created_at: DateTime<Utc>,
}
