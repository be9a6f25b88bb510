//! # Checkout bridge server
//! This module hosts the HTTP surface of the checkout bridge. It is responsible for:
//! Receiving new orders from the storefront checkout and persisting them.
//! Listening for payment confirmation webhooks from Coinbase Commerce.
//! Forwarding paid orders to the Shopify Admin API.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/order`: Accepts a checkout order and stores it, pending payment.
//! * `/webhook/coinbase`: The webhook route for receiving charge events from Coinbase Commerce.
//! * `/api/shopify_order`: Creates a Shopify order directly from a checkout payload.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;

pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
