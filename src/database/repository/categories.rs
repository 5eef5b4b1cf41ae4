use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Billboard, Category, CategoryWithBillboard};
use crate::validate::{self, CategoryFields, CategoryPayload, ValidationError};

use super::Resource;

pub struct Categories;

#[async_trait]
impl Resource for Categories {
    type Payload = CategoryPayload;
    type Fields = CategoryFields;
    type Entity = Category;

    const LABEL: &'static str = "CATEGORY";

    fn validate(payload: Self::Payload) -> Result<Self::Fields, ValidationError> {
        validate::category(payload)
    }

    async fn insert(
        pool: &PgPool,
        store_id: Uuid,
        fields: Self::Fields,
    ) -> Result<Self::Entity, DatabaseError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, store_id, billboard_id, name) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(fields.billboard_id)
        .bind(&fields.name)
        .fetch_one(pool)
        .await?;
        Ok(category)
    }

    async fn list(pool: &PgPool, store_id: Uuid) -> Result<Vec<Self::Entity>, DatabaseError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE store_id = $1")
                .bind(store_id)
                .fetch_all(pool)
                .await?;
        Ok(categories)
    }

    async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Self::Entity>, DatabaseError> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(category)
    }

    async fn update(pool: &PgPool, id: Uuid, fields: Self::Fields) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE categories SET name = $2, billboard_id = $3, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.billboard_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Single-record fetch with the billboard eager-loaded; the category detail
/// endpoint returns this instead of the bare row.
pub async fn find_with_billboard(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<CategoryWithBillboard>, DatabaseError> {
    let Some(category) = Categories::find(pool, id).await? else {
        return Ok(None);
    };

    let billboard = sqlx::query_as::<_, Billboard>("SELECT * FROM billboards WHERE id = $1")
        .bind(category.billboard_id)
        .fetch_one(pool)
        .await?;

    Ok(Some(CategoryWithBillboard {
        category,
        billboard,
    }))
}
