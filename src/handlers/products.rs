use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{authorize_store_access, Identity};
use crate::database::manager::Database;
use crate::database::models::{Product, ProductWithRelations};
use crate::database::repository::products::{self, ProductFilters};
use crate::error::ApiError;
use crate::validate::{self, ProductPayload};

use super::resource::Affected;

const LABEL: &str = "PRODUCT";

async fn pool() -> Result<sqlx::PgPool, ApiError> {
    Database::pool().await.map_err(|err| ApiError::storage(LABEL, err))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    /// Any present value means "featured only"; absence applies no filter.
    pub is_featured: Option<String>,
}

impl ProductListQuery {
    fn into_filters(self) -> ProductFilters {
        ProductFilters {
            category_id: self.category_id,
            color_id: self.color_id,
            size_id: self.size_id,
            is_featured: self.is_featured.map(|_| true),
        }
    }
}

/// POST /api/:store_id/products - create a product with its image set
pub async fn create(
    Path(store_id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    let user_id = identity.user_id()?.to_owned();
    let fields = validate::product(payload)?;

    let pool = pool().await?;
    authorize_store_access(&pool, &user_id, store_id).await?;

    let product = products::insert(&pool, store_id, fields)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(product))
}

/// GET /api/:store_id/products - storefront listing: filterable, never
/// archived, relations eager-loaded
pub async fn list(
    Path(store_id): Path<Uuid>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductWithRelations>>, ApiError> {
    let pool = pool().await?;
    let products = products::list(&pool, store_id, query.into_filters())
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(products))
}

/// GET /api/:store_id/products/:product_id - product with relations, or null
pub async fn find(
    Path((_store_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Option<ProductWithRelations>>, ApiError> {
    let pool = pool().await?;
    let product = products::find(&pool, product_id)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(product))
}

/// PATCH /api/:store_id/products/:product_id - replace fields and the whole
/// image set
pub async fn update(
    Path((store_id, product_id)): Path<(Uuid, Uuid)>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    let user_id = identity.user_id()?.to_owned();
    let fields = validate::product(payload)?;

    let pool = pool().await?;
    authorize_store_access(&pool, &user_id, store_id).await?;

    let product = products::update(&pool, product_id, fields)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(product))
}

/// DELETE /api/:store_id/products/:product_id - delete; images cascade,
/// order items block
pub async fn delete(
    Path((store_id, product_id)): Path<(Uuid, Uuid)>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Affected>, ApiError> {
    let user_id = identity.user_id()?.to_owned();

    let pool = pool().await?;
    authorize_store_access(&pool, &user_id, store_id).await?;

    let count = products::delete(&pool, product_id)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(Affected { count }))
}
