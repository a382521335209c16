use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadedImages {
    pub images: Vec<String>,
}

/// Multipart body of `POST /upload-images`.
#[derive(ToSchema)]
pub struct UploadImagesForm {
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<Vec<u8>>,
}

/// Multipart body of `POST /products-with-images`.
#[derive(ToSchema)]
pub struct ProductWithImagesForm {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Deprecated: send the `admin_session` header instead.
    pub admin_session: Option<String>,
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<Vec<u8>>,
}
