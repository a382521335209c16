use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::{ProductList, ProductPayload, SearchQuery},
    error::AppResult,
    middleware::auth::AdminSession,
    models::Product,
    response::MessageResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "List products", body = ProductList)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductList>> {
    let items = product_service::list_products(&state).await?;
    Ok(Json(ProductList { items }))
}

#[utoipa::path(
    get,
    path = "/products/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products matching every given filter", body = ProductList)
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ProductList>> {
    let items = product_service::search_products(&state, query).await?;
    Ok(Json(ProductList { items }))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Create product", body = Product),
        (status = 400, description = "Invalid price"),
        (status = 403, description = "Forbidden"),
    ),
    security(("admin_session" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    admin: AdminSession,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<Product>> {
    let draft = payload.into_draft()?;
    let product = product_service::create_product(&state, &admin, draft).await?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Replaced product", body = Product),
        (status = 400, description = "Invalid price"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found"),
    ),
    security(("admin_session" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<Product>> {
    let draft = payload.into_draft()?;
    let product = product_service::update_product(&state, &admin, id, draft).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product", body = MessageResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found"),
    ),
    security(("admin_session" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    product_service::delete_product(&state, &admin, id).await?;
    Ok(Json(MessageResponse::new("Product deleted")))
}
