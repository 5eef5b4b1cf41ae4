pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod validate;

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Store administration
        .merge(store_routes())
        // Per-store catalog resources
        .merge(catalog_routes())
        // Orders and the public checkout flow
        .merge(order_routes())
        // Global middleware
        .layer(axum::middleware::from_fn(middleware::extract_identity))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn store_routes() -> Router {
    use axum::routing::{patch, post};
    use handlers::stores;

    Router::new()
        .route("/api/stores", post(stores::create))
        .route(
            "/api/stores/:store_id",
            patch(stores::update).delete(stores::delete),
        )
}

fn catalog_routes() -> Router {
    use database::repository::billboards::Billboards;
    use database::repository::categories::Categories;
    use database::repository::colors::Colors;
    use database::repository::sizes::Sizes;
    use handlers::{categories, products, resource};

    Router::new()
        .route(
            "/api/:store_id/billboards",
            get(resource::list::<Billboards>).post(resource::create::<Billboards>),
        )
        .route(
            "/api/:store_id/billboards/:billboard_id",
            get(resource::find::<Billboards>)
                .patch(resource::update::<Billboards>)
                .delete(resource::delete::<Billboards>),
        )
        .route(
            "/api/:store_id/categories",
            get(resource::list::<Categories>).post(resource::create::<Categories>),
        )
        .route(
            "/api/:store_id/categories/:category_id",
            get(categories::find)
                .patch(resource::update::<Categories>)
                .delete(resource::delete::<Categories>),
        )
        .route(
            "/api/:store_id/sizes",
            get(resource::list::<Sizes>).post(resource::create::<Sizes>),
        )
        .route(
            "/api/:store_id/sizes/:size_id",
            get(resource::find::<Sizes>)
                .patch(resource::update::<Sizes>)
                .delete(resource::delete::<Sizes>),
        )
        .route(
            "/api/:store_id/colors",
            get(resource::list::<Colors>).post(resource::create::<Colors>),
        )
        .route(
            "/api/:store_id/colors/:color_id",
            get(resource::find::<Colors>)
                .patch(resource::update::<Colors>)
                .delete(resource::delete::<Colors>),
        )
        .route(
            "/api/:store_id/products",
            get(products::list).post(products::create),
        )
        .route(
            "/api/:store_id/products/:product_id",
            get(products::find)
                .patch(products::update)
                .delete(products::delete),
        )
}

fn order_routes() -> Router {
    use axum::routing::post;
    use handlers::{checkout, orders};

    Router::new()
        .route("/api/:store_id/orders", get(orders::list))
        .route(
            "/api/:store_id/checkout",
            post(checkout::create).options(checkout::preflight),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Store Admin API",
        "version": version,
        "description": "Multi-tenant e-commerce admin backend with a public storefront checkout",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "stores": "/api/stores[/:storeId] (owner mutations)",
            "billboards": "/api/:storeId/billboards[/:billboardId]",
            "categories": "/api/:storeId/categories[/:categoryId]",
            "sizes": "/api/:storeId/sizes[/:sizeId]",
            "colors": "/api/:storeId/colors[/:colorId]",
            "products": "/api/:storeId/products[/:productId]",
            "orders": "/api/:storeId/orders (read only)",
            "checkout": "/api/:storeId/checkout (public)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::manager::Database::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
