use axum::extract::{Extension, Path};
use axum::Json;
use uuid::Uuid;

use crate::auth::Identity;
use crate::database::manager::Database;
use crate::database::models::Store;
use crate::database::repository::stores;
use crate::error::ApiError;
use crate::validate::{self, StorePayload};

use super::resource::Affected;

const LABEL: &str = "STORE";

async fn pool() -> Result<sqlx::PgPool, ApiError> {
    Database::pool().await.map_err(|err| ApiError::storage(LABEL, err))
}

/// POST /api/stores - create a store owned by the acting user
pub async fn create(
    Extension(identity): Extension<Identity>,
    Json(payload): Json<StorePayload>,
) -> Result<Json<Store>, ApiError> {
    let user_id = identity.user_id()?.to_owned();
    let fields = validate::store(payload)?;

    let pool = pool().await?;
    let store = stores::insert(&pool, &user_id, fields)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(store))
}

/// PATCH /api/stores/:store_id - rename; scoping to the owning user means a
/// foreign store simply reports zero affected rows
pub async fn update(
    Path(store_id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<StorePayload>,
) -> Result<Json<Affected>, ApiError> {
    let user_id = identity.user_id()?.to_owned();
    let fields = validate::store(payload)?;

    let pool = pool().await?;
    let count = stores::rename(&pool, store_id, &user_id, fields)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(Affected { count }))
}

/// DELETE /api/stores/:store_id - delete; blocked while billboards,
/// categories, products or orders still reference the store
pub async fn delete(
    Path(store_id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Affected>, ApiError> {
    let user_id = identity.user_id()?.to_owned();

    let pool = pool().await?;
    let count = stores::delete(&pool, store_id, &user_id)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    Ok(Json(Affected { count }))
}
