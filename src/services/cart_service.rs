use crate::{
    dto::cart::{AddToCartRequest, AddToCartResponse},
    error::{AppError, AppResult},
    services::product_service,
    state::AppState,
};

/// Confirms the product exists and echoes it back; no cart is persisted.
pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<AddToCartResponse> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    let product = product_service::get_product(state, payload.product_id).await?;

    Ok(AddToCartResponse {
        message: "Product added to cart".to_string(),
        product,
        quantity: payload.quantity,
    })
}
