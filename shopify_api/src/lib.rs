mod api;
mod config;
mod data_objects;
mod error;

pub mod helpers;

pub use api::{OrderForwarder, ShopifyApi};
pub use config::ShopifyConfig;
pub use data_objects::{LineItem, NewShopifyOrder, ShopifyCustomer, ShopifyShippingAddress};
pub use error::ShopifyApiError;
