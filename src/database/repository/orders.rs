use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Order, OrderItem, OrderItemWithProduct, OrderWithItems, Product};

/// Orders for the store, newest first, with items and their products.
pub async fn list(pool: &PgPool, store_id: Uuid) -> Result<Vec<OrderWithItems>, DatabaseError> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE store_id = $1 ORDER BY created_at DESC",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;

    let mut loaded = Vec::with_capacity(orders.len());
    for order in orders {
        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id FROM order_items WHERE order_id = $1",
        )
        .bind(order.id)
        .fetch_all(pool)
        .await?;

        let mut order_items = Vec::with_capacity(items.len());
        for item in items {
            let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
                .bind(item.product_id)
                .fetch_one(pool)
                .await?;
            order_items.push(OrderItemWithProduct { item, product });
        }

        loaded.push(OrderWithItems { order, order_items });
    }
    Ok(loaded)
}

/// Create an unpaid order with one item per supplied product id, in a single
/// transaction. Duplicate ids produce duplicate items; a nonexistent product
/// id fails the whole order at the foreign key.
pub async fn create_from_cart(
    pool: &PgPool,
    store_id: Uuid,
    product_ids: &[Uuid],
) -> Result<Order, DatabaseError> {
    let mut tx = pool.begin().await?;

    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (id, store_id, is_paid) VALUES ($1, $2, FALSE) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(store_id)
    .fetch_one(&mut *tx)
    .await?;

    for product_id in product_ids {
        sqlx::query("INSERT INTO order_items (id, order_id, product_id) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(order.id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(order)
}
