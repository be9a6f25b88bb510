use std::fmt::Debug;

use log::debug;
use sqlx::SqlitePool;

use crate::{
    db::sqlite::{customers, new_pool, orders},
    db_types::{Customer, NewOrder, OrderId, OrderRecord},
    traits::{InsertedOrder, OrderStore, StoreError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Applies the embedded schema migrations. The server runs this once at startup; tests run it against
    /// throwaway databases.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./src/db/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }
}

impl OrderStore for SqliteDatabase {
    async fn insert_order(&self, order: NewOrder) -> Result<InsertedOrder, StoreError> {
        let mut tx = self.pool.begin().await?;
        let customer_id = customers::insert_customer(&order.shipping_info, &mut *tx).await?;
        let order_row_id = orders::insert_order(&order, customer_id, &mut *tx).await?;
        tx.commit().await?;
        debug!("🗃️ Order {} stored for customer #{customer_id}", order.order_id);
        Ok(InsertedOrder { order_id: order_row_id, customer_id })
    }

    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<OrderRecord>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_by_order_id(order_id, &mut *conn).await
    }

    async fn fetch_customer(&self, customer_id: i64) -> Result<Option<Customer>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        customers::fetch_customer_by_id(customer_id, &mut *conn).await
    }
}
