use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_address: String,
    /// Stored JSON text, returned as-is.
    pub products: String,
}

/// One item of a checkout cart. Unknown keys are rejected so the stored line
/// is exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CartLine {
    pub product_id: i32,
    pub quantity: i32,
}

/// Validated product fields, ready to be inserted or written over an existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub images: Vec<String>,
}

impl NewProduct {
    /// Builds a draft, rejecting prices that are negative or not finite.
    pub fn new(
        name: String,
        description: String,
        price: f64,
        image_url: String,
        images: Vec<String>,
    ) -> AppResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::BadRequest(
                "price must be a non-negative number".to_string(),
            ));
        }
        Ok(Self {
            name,
            description,
            price,
            image_url,
            images,
        })
    }
}

/// Contact fields shared by both order creation routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(price: f64) -> AppResult<NewProduct> {
        NewProduct::new("Mug".into(), String::new(), price, String::new(), vec![])
    }

    #[test]
    fn accepts_zero_and_positive_prices() {
        assert!(draft(0.0).is_ok());
        assert_eq!(draft(12.5).unwrap().price, 12.5);
    }

    #[test]
    fn cart_line_rejects_unknown_keys() {
        let line: CartLine =
            serde_json::from_str(r#"{"product_id": 3, "quantity": 2}"#).unwrap();
        assert_eq!(line, CartLine { product_id: 3, quantity: 2 });

        let extra = serde_json::from_str::<CartLine>(r#"{"product_id": 3, "quantity": 2, "size": "M"}"#);
        assert!(extra.is_err());
    }

    #[test]
    fn rejects_negative_and_non_finite_prices() {
        assert!(matches!(draft(-0.01), Err(AppError::BadRequest(_))));
        assert!(matches!(draft(f64::NAN), Err(AppError::BadRequest(_))));
        assert!(matches!(draft(f64::INFINITY), Err(AppError::BadRequest(_))));
    }
}
