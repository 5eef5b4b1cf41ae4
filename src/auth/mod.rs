//! Request identity and the store ownership guard.
//!
//! Identity is established by an external provider; this service only sees
//! an opaque user id and treats it as the sole authorization key.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Store;
use crate::database::repository::stores;
use crate::error::ApiError;

/// Acting identity for a request, extracted by middleware and passed
/// explicitly to every operation that needs it. `None` when the request
/// carried no identity.
#[derive(Clone, Debug, Default)]
pub struct Identity(pub Option<String>);

impl Identity {
    /// The authenticated user id, or 401 when no identity was established.
    pub fn user_id(&self) -> Result<&str, ApiError> {
        match self.0.as_deref() {
            Some(user_id) if !user_id.trim().is_empty() => Ok(user_id),
            _ => Err(ApiError::unauthenticated()),
        }
    }
}

/// Store ownership guard: resolves the store owned by `user_id`, or 403 when
/// the store does not belong to them. No side effects. Every mutating
/// operation calls this after validation; read paths deliberately do not.
pub async fn authorize_store_access(
    pool: &PgPool,
    user_id: &str,
    store_id: Uuid,
) -> Result<Store, ApiError> {
    match stores::find_for_user(pool, store_id, user_id).await {
        Ok(Some(store)) => Ok(store),
        Ok(None) => Err(ApiError::unauthorized()),
        Err(err) => Err(ApiError::storage("AUTH", err)),
    }
}
