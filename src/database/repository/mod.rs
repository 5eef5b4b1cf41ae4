//! Per-entity repositories. The simple catalog entities (billboards,
//! categories, sizes, colors) share one contract shape, expressed as the
//! [`Resource`] trait: a validation rule set plus the store-scoped SQL
//! operations. Generic handlers are instantiated once per binding instead of
//! duplicating the validate/authorize/query pipeline per entity.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::validate::ValidationError;

pub mod billboards;
pub mod categories;
pub mod colors;
pub mod orders;
pub mod products;
pub mod sizes;
pub mod stores;

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Payload: DeserializeOwned + Send + 'static;
    type Fields: Send + 'static;
    type Entity: Serialize + Send + Sync + 'static;

    /// Log label for storage failures, e.g. "BILLBOARD".
    const LABEL: &'static str;

    /// Pure field validation; no storage access.
    fn validate(payload: Self::Payload) -> Result<Self::Fields, ValidationError>;

    /// Insert a new record with a fresh identifier.
    async fn insert(
        pool: &PgPool,
        store_id: Uuid,
        fields: Self::Fields,
    ) -> Result<Self::Entity, DatabaseError>;

    /// All records in the store.
    async fn list(pool: &PgPool, store_id: Uuid) -> Result<Vec<Self::Entity>, DatabaseError>;

    /// Single record by id, or None.
    async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Self::Entity>, DatabaseError>;

    /// Whole-record replacement of the mutable fields; returns affected rows.
    async fn update(pool: &PgPool, id: Uuid, fields: Self::Fields) -> Result<u64, DatabaseError>;

    /// Delete by id; returns affected rows. Dependent records surface as
    /// [`DatabaseError::ReferentialConflict`], never a cascade.
    async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, DatabaseError>;
}
