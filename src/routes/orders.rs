use axum::{Json, extract::State};

use crate::{
    dto::orders::{CheckoutRequest, CheckoutResponse, CreateOrderRequest},
    error::AppResult,
    models::Order,
    services::order_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order recorded", body = CheckoutResponse),
        (status = 400, description = "A cart line has a zero or negative quantity; stricter than earlier releases, which stored any integer"),
        (status = 422, description = "A cart line is missing product_id/quantity or carries other keys"),
    ),
    tag = "Orders"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    let order = order_service::checkout(&state, payload).await?;
    Ok(Json(CheckoutResponse {
        message: "Order confirmed".to_string(),
        order_id: order.id,
    }))
}

/// Deprecated: stores a bare product id list. Use `/checkout`, which stores cart lines.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order recorded", body = Order),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = order_service::create_order(&state, payload).await?;
    Ok(Json(order))
}
