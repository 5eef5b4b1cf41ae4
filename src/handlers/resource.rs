//! Generic CRUD handlers, instantiated once per repository binding. The
//! pipeline is identical for every catalog entity: identity check, field
//! validation, store ownership guard, then the storage call. Read paths skip
//! the guard on purpose; store contents are readable cross-tenant.

use axum::extract::{Extension, Path};
use axum::Json;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{authorize_store_access, Identity};
use crate::database::manager::Database;
use crate::database::repository::Resource;
use crate::error::ApiError;

/// Batch-result shape returned by update/delete on the simple entities.
#[derive(Debug, Serialize)]
pub struct Affected {
    pub count: u64,
}

async fn pool(label: &str) -> Result<PgPool, ApiError> {
    Database::pool().await.map_err(|err| ApiError::storage(label, err))
}

/// POST /api/:store_id/{resource} - create a record in the store
pub async fn create<R: Resource>(
    Path(store_id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<R::Payload>,
) -> Result<Json<R::Entity>, ApiError> {
    let user_id = identity.user_id()?.to_owned();
    let fields = R::validate(payload)?;

    let pool = pool(R::LABEL).await?;
    authorize_store_access(&pool, &user_id, store_id).await?;

    let entity = R::insert(&pool, store_id, fields)
        .await
        .map_err(|err| ApiError::storage(R::LABEL, err))?;
    Ok(Json(entity))
}

/// GET /api/:store_id/{resource} - list all records in the store
pub async fn list<R: Resource>(
    Path(store_id): Path<Uuid>,
) -> Result<Json<Vec<R::Entity>>, ApiError> {
    let pool = pool(R::LABEL).await?;
    let entities = R::list(&pool, store_id)
        .await
        .map_err(|err| ApiError::storage(R::LABEL, err))?;
    Ok(Json(entities))
}

/// GET /api/:store_id/{resource}/:id - single record, or a 200 null body
pub async fn find<R: Resource>(
    Path((_store_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Option<R::Entity>>, ApiError> {
    let pool = pool(R::LABEL).await?;
    let entity = R::find(&pool, id)
        .await
        .map_err(|err| ApiError::storage(R::LABEL, err))?;
    Ok(Json(entity))
}

/// PATCH /api/:store_id/{resource}/:id - replace the mutable fields
pub async fn update<R: Resource>(
    Path((store_id, id)): Path<(Uuid, Uuid)>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<R::Payload>,
) -> Result<Json<Affected>, ApiError> {
    let user_id = identity.user_id()?.to_owned();
    let fields = R::validate(payload)?;

    let pool = pool(R::LABEL).await?;
    authorize_store_access(&pool, &user_id, store_id).await?;

    let count = R::update(&pool, id, fields)
        .await
        .map_err(|err| ApiError::storage(R::LABEL, err))?;
    Ok(Json(Affected { count }))
}

/// DELETE /api/:store_id/{resource}/:id - delete unless dependents exist
pub async fn delete<R: Resource>(
    Path((store_id, id)): Path<(Uuid, Uuid)>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Affected>, ApiError> {
    let user_id = identity.user_id()?.to_owned();

    let pool = pool(R::LABEL).await?;
    authorize_store_access(&pool, &user_id, store_id).await?;

    let count = R::delete(&pool, id)
        .await
        .map_err(|err| ApiError::storage(R::LABEL, err))?;
    Ok(Json(Affected { count }))
}
