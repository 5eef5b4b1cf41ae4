use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Color;
use crate::validate::{self, ColorFields, ColorPayload, ValidationError};

use super::Resource;

pub struct Colors;

#[async_trait]
impl Resource for Colors {
    type Payload = ColorPayload;
    type Fields = ColorFields;
    type Entity = Color;

    const LABEL: &'static str = "COLOR";

    fn validate(payload: Self::Payload) -> Result<Self::Fields, ValidationError> {
        validate::color(payload)
    }

    async fn insert(
        pool: &PgPool,
        store_id: Uuid,
        fields: Self::Fields,
    ) -> Result<Self::Entity, DatabaseError> {
        let color = sqlx::query_as::<_, Color>(
            "INSERT INTO colors (id, store_id, name, value) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&fields.name)
        .bind(&fields.value)
        .fetch_one(pool)
        .await?;
        Ok(color)
    }

    async fn list(pool: &PgPool, store_id: Uuid) -> Result<Vec<Self::Entity>, DatabaseError> {
        let colors = sqlx::query_as::<_, Color>("SELECT * FROM colors WHERE store_id = $1")
            .bind(store_id)
            .fetch_all(pool)
            .await?;
        Ok(colors)
    }

    async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Self::Entity>, DatabaseError> {
        let color = sqlx::query_as::<_, Color>("SELECT * FROM colors WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(color)
    }

    async fn update(pool: &PgPool, id: Uuid, fields: Self::Fields) -> Result<u64, DatabaseError> {
        let result =
            sqlx::query("UPDATE colors SET name = $2, value = $3, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(&fields.name)
                .bind(&fields.value)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM colors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
