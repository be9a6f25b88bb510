mod errors;
mod order_flow_api;

pub use errors::OrderFlowError;
pub use order_flow_api::OrderFlowApi;
