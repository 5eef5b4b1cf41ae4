use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Category, Color, Image, Product, ProductWithRelations, Size};
use crate::validate::ProductFields;

/// Optional equality predicates for the storefront-facing product listing.
#[derive(Debug, Default)]
pub struct ProductFilters {
    pub category_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub is_featured: Option<bool>,
}

pub async fn insert(
    pool: &PgPool,
    store_id: Uuid,
    fields: ProductFields,
) -> Result<Product, DatabaseError> {
    let mut tx = pool.begin().await?;

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products \
             (id, store_id, category_id, color_id, size_id, name, price, is_featured, is_archived) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(store_id)
    .bind(fields.category_id)
    .bind(fields.color_id)
    .bind(fields.size_id)
    .bind(&fields.name)
    .bind(fields.price)
    .bind(fields.is_featured)
    .bind(fields.is_archived)
    .fetch_one(&mut *tx)
    .await?;

    insert_images(&mut tx, product.id, &fields.images).await?;

    tx.commit().await?;
    Ok(product)
}

/// Archived products never appear here; relations are eager-loaded and rows
/// come back newest first.
pub async fn list(
    pool: &PgPool,
    store_id: Uuid,
    filters: ProductFilters,
) -> Result<Vec<ProductWithRelations>, DatabaseError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products \
         WHERE store_id = $1 \
           AND is_archived = FALSE \
           AND ($2::uuid IS NULL OR category_id = $2) \
           AND ($3::uuid IS NULL OR color_id = $3) \
           AND ($4::uuid IS NULL OR size_id = $4) \
           AND ($5::boolean IS NULL OR is_featured = $5) \
         ORDER BY created_at DESC",
    )
    .bind(store_id)
    .bind(filters.category_id)
    .bind(filters.color_id)
    .bind(filters.size_id)
    .bind(filters.is_featured)
    .fetch_all(pool)
    .await?;

    let mut loaded = Vec::with_capacity(products.len());
    for product in products {
        loaded.push(load_relations(pool, product).await?);
    }
    Ok(loaded)
}

pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<ProductWithRelations>, DatabaseError> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match product {
        Some(product) => Ok(Some(load_relations(pool, product).await?)),
        None => Ok(None),
    }
}

/// Products matching the supplied ids, for the checkout flow. Duplicate ids
/// in the input collapse here but not in the order items created from them.
pub async fn find_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Product>, DatabaseError> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await?;
    Ok(products)
}

/// Whole-record replacement. The image set is replaced wholesale in the same
/// transaction: any image not resubmitted is gone, and ordering follows the
/// submitted sequence.
pub async fn update(pool: &PgPool, id: Uuid, fields: ProductFields) -> Result<Product, DatabaseError> {
    let mut tx = pool.begin().await?;

    let product = sqlx::query_as::<_, Product>(
        "UPDATE products \
         SET category_id = $2, color_id = $3, size_id = $4, name = $5, price = $6, \
             is_featured = $7, is_archived = $8, updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(fields.category_id)
    .bind(fields.color_id)
    .bind(fields.size_id)
    .bind(&fields.name)
    .bind(fields.price)
    .bind(fields.is_featured)
    .bind(fields.is_archived)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM product_images WHERE product_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    insert_images(&mut tx, id, &fields.images).await?;

    tx.commit().await?;
    Ok(product)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

async fn insert_images(
    tx: &mut Transaction<'_, Postgres>,
    product_id: Uuid,
    urls: &[String],
) -> Result<(), DatabaseError> {
    for (position, url) in urls.iter().enumerate() {
        sqlx::query("INSERT INTO product_images (id, product_id, url, position) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::new_v4())
            .bind(product_id)
            .bind(url)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

async fn load_relations(
    pool: &PgPool,
    product: Product,
) -> Result<ProductWithRelations, DatabaseError> {
    let images = sqlx::query_as::<_, Image>(
        "SELECT id, product_id, url, position FROM product_images \
         WHERE product_id = $1 ORDER BY position",
    )
    .bind(product.id)
    .fetch_all(pool)
    .await?;

    // Foreign keys guarantee the relations exist.
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(product.category_id)
        .fetch_one(pool)
        .await?;
    let color = sqlx::query_as::<_, Color>("SELECT * FROM colors WHERE id = $1")
        .bind(product.color_id)
        .fetch_one(pool)
        .await?;
    let size = sqlx::query_as::<_, Size>("SELECT * FROM sizes WHERE id = $1")
        .bind(product.size_id)
        .fetch_one(pool)
        .await?;

    Ok(ProductWithRelations {
        product,
        images,
        category,
        color,
        size,
    })
}
