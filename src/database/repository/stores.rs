use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Store;
use crate::validate::StoreFields;

/// Ownership lookup used by the guard: a store is only visible here when
/// both the id and the owning user match.
pub async fn find_for_user(
    pool: &PgPool,
    store_id: Uuid,
    user_id: &str,
) -> Result<Option<Store>, DatabaseError> {
    let store = sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = $1 AND user_id = $2")
        .bind(store_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(store)
}

pub async fn insert(
    pool: &PgPool,
    user_id: &str,
    fields: StoreFields,
) -> Result<Store, DatabaseError> {
    let store = sqlx::query_as::<_, Store>(
        "INSERT INTO stores (id, user_id, name) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&fields.name)
    .fetch_one(pool)
    .await?;
    Ok(store)
}

/// Rename scoped to `id AND user_id`, so a store belonging to someone else
/// updates zero rows instead of failing.
pub async fn rename(
    pool: &PgPool,
    store_id: Uuid,
    user_id: &str,
    fields: StoreFields,
) -> Result<u64, DatabaseError> {
    let result =
        sqlx::query("UPDATE stores SET name = $3, updated_at = now() WHERE id = $1 AND user_id = $2")
            .bind(store_id)
            .bind(user_id)
            .bind(&fields.name)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, store_id: Uuid, user_id: &str) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM stores WHERE id = $1 AND user_id = $2")
        .bind(store_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
