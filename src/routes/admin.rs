use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::orders::OrderList,
    error::AppResult,
    middleware::auth::AdminSession,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/orders", get(list_all_orders))
}

#[utoipa::path(
    get,
    path = "/admin/orders",
    responses(
        (status = 200, description = "Every order (admin only)", body = OrderList),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal Server Error"),
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    admin: AdminSession,
) -> AppResult<Json<OrderList>> {
    let items = order_service::list_orders(&state, &admin).await?;
    Ok(Json(OrderList { items }))
}
