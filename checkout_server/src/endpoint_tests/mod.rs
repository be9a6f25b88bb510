mod helpers;
mod mocks;
mod orders;
mod shopify;
mod webhook;
