use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    dto::orders::{CheckoutRequest, CreateOrderRequest},
    entity::orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::{Customer, Order},
    state::AppState,
};

/// Records an order whose `products` column holds the submitted cart lines.
pub async fn checkout(state: &AppState, payload: CheckoutRequest) -> AppResult<Order> {
    if let Some(line) = payload.cart.iter().find(|line| line.quantity <= 0) {
        return Err(AppError::BadRequest(format!(
            "quantity for product {} must be greater than 0",
            line.product_id
        )));
    }

    let products = serde_json::to_string(&payload.cart)?;
    let order = insert_order(state, payload.customer, products).await?;
    tracing::info!(order_id = order.id, lines = payload.cart.len(), "checkout recorded");

    Ok(order)
}

/// Legacy path: `products` holds a bare list of product ids instead of cart lines.
pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    let products = serde_json::to_string(&payload.products)?;
    let order = insert_order(state, payload.customer, products).await?;
    tracing::info!(order_id = order.id, "order created from product id list");

    Ok(order)
}

pub async fn list_orders(state: &AppState, _admin: &AdminSession) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .order_by_asc(OrderCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();
    Ok(orders)
}

async fn insert_order(state: &AppState, customer: Customer, products: String) -> AppResult<Order> {
    let order = OrderActive {
        id: NotSet,
        user_name: Set(customer.user_name),
        user_email: Set(customer.user_email),
        user_phone: Set(customer.user_phone),
        user_address: Set(customer.user_address),
        products: Set(products),
    }
    .insert(&state.orm)
    .await?;

    Ok(order_from_entity(order))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        user_name: model.user_name,
        user_email: model.user_email,
        user_phone: model.user_phone,
        user_address: model.user_address,
        products: model.products,
    }
}
