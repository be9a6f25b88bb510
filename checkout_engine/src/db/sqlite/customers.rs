use sqlx::SqliteConnection;

use crate::{
    db_types::{Customer, ShippingInfo},
    traits::StoreError,
};

/// Inserts a customer row from the shipping details and returns its generated id. This is not atomic on its
/// own; the caller embeds it in the intake transaction by passing `&mut *tx` as the connection argument.
pub async fn insert_customer(info: &ShippingInfo, conn: &mut SqliteConnection) -> Result<i64, StoreError> {
    let result = sqlx::query(
        r#"
            INSERT INTO customers (name, address, city, state, zip, country, email)
            VALUES (?, ?, ?, ?, ?, ?, ?);
        "#,
    )
    .bind(&info.name)
    .bind(&info.address)
    .bind(&info.city)
    .bind(&info.state)
    .bind(&info.zip)
    .bind(&info.country)
    .bind(&info.email)
    .execute(conn)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn fetch_customer_by_id(id: i64, conn: &mut SqliteConnection) -> Result<Option<Customer>, StoreError> {
    let customer = sqlx::query_as::<_, Customer>(
        r#"
            SELECT id, name, address, city, state, zip, country, email, created_at
            FROM customers
            WHERE id = ?;
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(customer)
}
