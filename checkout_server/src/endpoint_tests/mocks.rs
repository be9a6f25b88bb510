use checkout_engine::{
    db_types::{Customer, NewOrder, OrderId, OrderRecord},
    InsertedOrder,
    OrderStore,
    StoreError,
};
use mockall::mock;
use serde_json::Value;
use shopify_api::{NewShopifyOrder, OrderForwarder, ShopifyApiError};

mock! {
    pub OrderStoreBackend {}
    impl OrderStore for OrderStoreBackend {
        async fn insert_order(&self, order: NewOrder) -> Result<InsertedOrder, StoreError>;
        async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<OrderRecord>, StoreError>;
        async fn fetch_customer(&self, customer_id: i64) -> Result<Option<Customer>, StoreError>;
    }
}

mock! {
    pub Forwarder {}
    impl OrderForwarder for Forwarder {
        async fn forward_order(&self, order: &NewShopifyOrder) -> Result<Value, ShopifyApiError>;
    }
}
