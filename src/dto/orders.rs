use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CartLine, Customer, Order};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CheckoutRequest {
    pub cart: Vec<CartLine>,
    #[serde(flatten)]
    pub customer: Customer,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponse {
    pub message: String,
    pub order_id: i32,
}

/// Legacy order body carrying bare product ids.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub customer: Customer,
    pub products: Vec<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<Order>)]
    pub items: Vec<Order>,
}
