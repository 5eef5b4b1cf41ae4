use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Billboard;
use crate::validate::{self, BillboardFields, BillboardPayload, ValidationError};

use super::Resource;

pub struct Billboards;

#[async_trait]
impl Resource for Billboards {
    type Payload = BillboardPayload;
    type Fields = BillboardFields;
    type Entity = Billboard;

    const LABEL: &'static str = "BILLBOARD";

    fn validate(payload: Self::Payload) -> Result<Self::Fields, ValidationError> {
        validate::billboard(payload)
    }

    async fn insert(
        pool: &PgPool,
        store_id: Uuid,
        fields: Self::Fields,
    ) -> Result<Self::Entity, DatabaseError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            "INSERT INTO billboards (id, store_id, label, image_url) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&fields.label)
        .bind(&fields.image_url)
        .fetch_one(pool)
        .await?;
        Ok(billboard)
    }

    async fn list(pool: &PgPool, store_id: Uuid) -> Result<Vec<Self::Entity>, DatabaseError> {
        let billboards =
            sqlx::query_as::<_, Billboard>("SELECT * FROM billboards WHERE store_id = $1")
                .bind(store_id)
                .fetch_all(pool)
                .await?;
        Ok(billboards)
    }

    async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Self::Entity>, DatabaseError> {
        let billboard = sqlx::query_as::<_, Billboard>("SELECT * FROM billboards WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(billboard)
    }

    async fn update(pool: &PgPool, id: Uuid, fields: Self::Fields) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE billboards SET label = $2, image_url = $3, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.label)
        .bind(&fields.image_url)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM billboards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
