use axum::{Json, extract::State};

use crate::{
    dto::cart::{AddToCartRequest, AddToCartResponse},
    error::AppResult,
    services::cart_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product found and echoed with the quantity", body = AddToCartResponse),
        (status = 400, description = "Quantity is zero or negative; stricter than earlier releases, which echoed any integer"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<AddToCartResponse>> {
    let resp = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(resp))
}
