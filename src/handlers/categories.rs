use axum::extract::Path;
use axum::Json;
use uuid::Uuid;

use crate::database::manager::Database;
use crate::database::models::CategoryWithBillboard;
use crate::database::repository::categories;
use crate::error::ApiError;

/// GET /api/:store_id/categories/:category_id - category with its billboard
/// eager-loaded; the create/list/update/delete paths use the generic
/// resource handlers.
pub async fn find(
    Path((_store_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Option<CategoryWithBillboard>>, ApiError> {
    let pool = Database::pool()
        .await
        .map_err(|err| ApiError::storage("CATEGORY", err))?;
    let category = categories::find_with_billboard(&pool, category_id)
        .await
        .map_err(|err| ApiError::storage("CATEGORY", err))?;
    Ok(Json(category))
}
