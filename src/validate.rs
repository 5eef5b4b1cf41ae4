//! Request validation: pure per-entity functions from a raw payload to a
//! validated fields value, or the first failing check in declared order.
//! Runs before the ownership guard so malformed requests never trigger an
//! authorization lookup.

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be {1}")]
    InvalidFormat(&'static str, &'static str),
}

/// Treat empty and whitespace-only strings as absent, matching the
/// falsy-string semantics the admin frontend relies on.
fn require(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Referenced-entity ids arrive as strings; an absent/empty id is a missing
/// field, a non-UUID id is a format error.
fn require_id(value: Option<String>, field: &'static str) -> Result<Uuid, ValidationError> {
    let raw = require(value, field)?;
    raw.parse()
        .map_err(|_| ValidationError::InvalidFormat(field, "a valid UUID"))
}

// ---------------------------------------------------------------------------
// Store

#[derive(Debug, Deserialize)]
pub struct StorePayload {
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct StoreFields {
    pub name: String,
}

pub fn store(payload: StorePayload) -> Result<StoreFields, ValidationError> {
    Ok(StoreFields {
        name: require(payload.name, "Name")?,
    })
}

// ---------------------------------------------------------------------------
// Billboard

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardPayload {
    pub label: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub struct BillboardFields {
    pub label: String,
    pub image_url: String,
}

pub fn billboard(payload: BillboardPayload) -> Result<BillboardFields, ValidationError> {
    Ok(BillboardFields {
        label: require(payload.label, "Label")?,
        image_url: require(payload.image_url, "Image URL")?,
    })
}

// ---------------------------------------------------------------------------
// Category

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: Option<String>,
    pub billboard_id: Option<String>,
}

#[derive(Debug)]
pub struct CategoryFields {
    pub name: String,
    pub billboard_id: Uuid,
}

pub fn category(payload: CategoryPayload) -> Result<CategoryFields, ValidationError> {
    Ok(CategoryFields {
        name: require(payload.name, "Name")?,
        billboard_id: require_id(payload.billboard_id, "Billboard ID")?,
    })
}

// ---------------------------------------------------------------------------
// Size

#[derive(Debug, Deserialize)]
pub struct SizePayload {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct SizeFields {
    pub name: String,
    pub value: String,
}

pub fn size(payload: SizePayload) -> Result<SizeFields, ValidationError> {
    Ok(SizeFields {
        name: require(payload.name, "Name")?,
        value: require(payload.value, "Value")?,
    })
}

// ---------------------------------------------------------------------------
// Color

#[derive(Debug, Deserialize)]
pub struct ColorPayload {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct ColorFields {
    pub name: String,
    pub value: String,
}

pub fn color(payload: ColorPayload) -> Result<ColorFields, ValidationError> {
    let name = require(payload.name, "Name")?;
    let value = require(payload.value, "Value")?;
    if !value.starts_with('#') {
        return Err(ValidationError::InvalidFormat(
            "Value",
            "a hex color starting with '#'",
        ));
    }
    Ok(ColorFields { name, value })
}

// ---------------------------------------------------------------------------
// Product

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
    pub color_id: Option<String>,
    pub size_id: Option<String>,
    pub images: Option<Vec<ImagePayload>>,
    pub is_featured: Option<bool>,
    pub is_archived: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ImagePayload {
    pub url: String,
}

#[derive(Debug)]
pub struct ProductFields {
    pub name: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub color_id: Uuid,
    pub size_id: Uuid,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub is_archived: bool,
}

pub fn product(payload: ProductPayload) -> Result<ProductFields, ValidationError> {
    let name = require(payload.name, "Name")?;
    let price = payload
        .price
        .ok_or(ValidationError::MissingField("Price"))?;
    let category_id = require_id(payload.category_id, "Category ID")?;
    let color_id = require_id(payload.color_id, "Color ID")?;
    let size_id = require_id(payload.size_id, "Size ID")?;

    let images: Vec<String> = payload
        .images
        .unwrap_or_default()
        .into_iter()
        .map(|image| image.url)
        .collect();
    if images.is_empty() {
        return Err(ValidationError::MissingField("Images"));
    }

    Ok(ProductFields {
        name,
        price,
        category_id,
        color_id,
        size_id,
        images,
        is_featured: payload.is_featured.unwrap_or(false),
        is_archived: payload.is_archived.unwrap_or(false),
    })
}
