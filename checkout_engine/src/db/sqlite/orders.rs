use chrono::{DateTime, Utc};
use log::trace;
use sqlx::{FromRow, SqliteConnection};

use crate::{
    db_types::{NewOrder, OrderId, OrderRecord, OrderStatusType},
    traits::StoreError,
};

/// Inserts a new order row referencing the given customer. Cart items and shipping info are serialized into
/// JSON columns so the confirmation path can rebuild the submission exactly as it arrived.
pub async fn insert_order(order: &NewOrder, customer_id: i64, conn: &mut SqliteConnection) -> Result<i64, StoreError> {
    let cart_items = serde_json::to_string(&order.cart_items)?;
    let shipping_info = serde_json::to_string(&order.shipping_info)?;
    let result = sqlx::query(
        r#"
            INSERT INTO orders (customer_id, order_id, total, status, cart_items, shipping_info)
            VALUES (?, ?, ?, ?, ?, ?);
        "#,
    )
    .bind(customer_id)
    .bind(order.order_id.as_str())
    .bind(&order.total)
    .bind(OrderStatusType::Pending)
    .bind(cart_items)
    .bind(shipping_info)
    .execute(conn)
    .await?;
    trace!("🗃️ Order {} saved with row id {}", order.order_id, result.last_insert_rowid());
    Ok(result.last_insert_rowid())
}

/// The raw joined row. The JSON columns are parsed into their typed forms in [`OrderRecord`].
#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    customer_id: i64,
    order_id: String,
    total: String,
    status: String,
    cart_items: String,
    shipping_info: String,
    customer_email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for OrderRecord {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            customer_id: row.customer_id,
            order_id: OrderId(row.order_id),
            total: row.total,
            status: OrderStatusType::from(row.status),
            cart_items: serde_json::from_str(&row.cart_items)?,
            shipping_info: serde_json::from_str(&row.shipping_info)?,
            customer_email: row.customer_email,
            created_at: row.created_at,
        })
    }
}

/// Returns the last entry in the orders table for the corresponding `order_id`, joined with its customer.
pub async fn fetch_order_by_order_id(
    order_id: &OrderId,
    conn: &mut SqliteConnection,
) -> Result<Option<OrderRecord>, StoreError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
            SELECT
                o.id,
                o.customer_id,
                o.order_id,
                o.total,
                o.status,
                o.cart_items,
                o.shipping_info,
                c.email AS customer_email,
                o.created_at
            FROM orders o
            JOIN customers c ON o.customer_id = c.id
            WHERE o.order_id = ?
            ORDER BY o.id DESC
            LIMIT 1;
        "#,
    )
    .bind(order_id.as_str())
    .fetch_optional(conn)
    .await?;
    row.map(OrderRecord::try_from).transpose()
}
