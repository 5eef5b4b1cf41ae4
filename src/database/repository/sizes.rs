use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Size;
use crate::validate::{self, SizeFields, SizePayload, ValidationError};

use super::Resource;

pub struct Sizes;

#[async_trait]
impl Resource for Sizes {
    type Payload = SizePayload;
    type Fields = SizeFields;
    type Entity = Size;

    const LABEL: &'static str = "SIZE";

    fn validate(payload: Self::Payload) -> Result<Self::Fields, ValidationError> {
        validate::size(payload)
    }

    async fn insert(
        pool: &PgPool,
        store_id: Uuid,
        fields: Self::Fields,
    ) -> Result<Self::Entity, DatabaseError> {
        let size = sqlx::query_as::<_, Size>(
            "INSERT INTO sizes (id, store_id, name, value) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&fields.name)
        .bind(&fields.value)
        .fetch_one(pool)
        .await?;
        Ok(size)
    }

    async fn list(pool: &PgPool, store_id: Uuid) -> Result<Vec<Self::Entity>, DatabaseError> {
        let sizes = sqlx::query_as::<_, Size>("SELECT * FROM sizes WHERE store_id = $1")
            .bind(store_id)
            .fetch_all(pool)
            .await?;
        Ok(sizes)
    }

    async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Self::Entity>, DatabaseError> {
        let size = sqlx::query_as::<_, Size>("SELECT * FROM sizes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(size)
    }

    async fn update(pool: &PgPool, id: Uuid, fields: Self::Fields) -> Result<u64, DatabaseError> {
        let result =
            sqlx::query("UPDATE sizes SET name = $2, value = $3, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(&fields.name)
                .bind(&fields.value)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM sizes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
