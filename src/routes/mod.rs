use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{response::ApiResponse, state::AppState, uploads::PUBLIC_BASE};

pub mod admin;
pub mod cart;
pub mod doc;
pub mod health;
pub mod orders;
pub mod products;
pub mod uploads;

/// Every route of the service plus the static upload area, with state applied.
pub fn create_router(state: AppState) -> Router {
    let uploaded_files = ServeDir::new(state.images.dir());

    Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .nest("/products", products::router())
        .route("/cart", post(cart::add_to_cart))
        .route("/checkout", post(orders::checkout))
        .route("/orders", post(orders::create_order))
        .nest("/admin", admin::router())
        .route("/upload-images", post(uploads::upload_images))
        .route(
            "/products-with-images",
            post(uploads::create_product_with_images),
        )
        .nest_service(PUBLIC_BASE, uploaded_files)
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success("Not Found", serde_json::json!({ "path": uri.path() }));
    (StatusCode::NOT_FOUND, Json(body))
}
