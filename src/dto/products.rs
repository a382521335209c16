use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{NewProduct, Product},
};

/// Body of both create and full-replace update.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl ProductPayload {
    pub fn into_draft(self) -> AppResult<NewProduct> {
        NewProduct::new(
            self.name,
            self.description.unwrap_or_default(),
            self.price,
            self.image_url,
            self.images.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name.
    pub query: Option<String>,
    /// Case-insensitive substring of the product description.
    pub category: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
