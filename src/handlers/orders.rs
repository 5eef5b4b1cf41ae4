use axum::extract::Path;
use axum::Json;
use uuid::Uuid;

use crate::database::manager::Database;
use crate::database::models::OrderWithItems;
use crate::database::repository::orders;
use crate::error::ApiError;

/// GET /api/:store_id/orders - orders with items and products, newest first
pub async fn list(Path(store_id): Path<Uuid>) -> Result<Json<Vec<OrderWithItems>>, ApiError> {
    let pool = Database::pool()
        .await
        .map_err(|err| ApiError::storage("ORDER", err))?;
    let orders = orders::list(&pool, store_id)
        .await
        .map_err(|err| ApiError::storage("ORDER", err))?;
    Ok(Json(orders))
}
