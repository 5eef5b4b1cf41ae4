use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::config;
use crate::database::manager::Database;
use crate::database::repository::{orders, products};
use crate::error::ApiError;

const LABEL: &str = "CHECKOUT";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub product_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// POST /api/:store_id/checkout - public flow, no identity or ownership
/// check. Creates an unpaid order for the supplied cart and returns the
/// storefront redirect target; payment settlement is an external webhook
/// concern.
pub async fn create(
    Path(store_id): Path<Uuid>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let product_ids = payload.product_ids.unwrap_or_default();
    if product_ids.is_empty() {
        return Err(ApiError::bad_request("Product IDs are required"));
    }

    let pool = Database::pool()
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;

    let products = products::find_by_ids(&pool, &product_ids)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    tracing::debug!(
        "checkout for store {} matched {} of {} cart entries",
        store_id,
        products.len(),
        product_ids.len()
    );

    let order = orders::create_from_cart(&pool, store_id, &product_ids)
        .await
        .map_err(|err| ApiError::storage(LABEL, err))?;
    tracing::info!("created order {} for store {}", order.id, store_id);

    let url = redirect_url(&config::config().checkout.frontend_store_url, true);
    Ok(Json(CheckoutResponse { url }))
}

/// OPTIONS /api/:store_id/checkout - explicit preflight responder; the CORS
/// layer attaches the permissive headers.
pub async fn preflight() -> Json<Value> {
    Json(json!({}))
}

/// The success/canceled indicator reflects only whether the order record was
/// created, not any payment outcome.
fn redirect_url(frontend_store_url: &str, created: bool) -> String {
    let query = if created { "?success=1" } else { "?canceled=1" };
    format!("{}/cart{}", frontend_store_url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_targets_the_cart_page() {
        assert_eq!(
            redirect_url("http://localhost:3001", true),
            "http://localhost:3001/cart?success=1"
        );
        assert_eq!(
            redirect_url("http://localhost:3001", false),
            "http://localhost:3001/cart?canceled=1"
        );
    }
}
