use axum::{
    Json,
    extract::{Multipart, State},
    http::HeaderMap,
};

use crate::{
    dto::uploads::{ProductWithImagesForm, UploadImagesForm, UploadedImages},
    error::{AppError, AppResult},
    middleware::auth::{ADMIN_HEADER, AdminSession},
    models::{NewProduct, Product},
    multipart::FormFields,
    services::{product_service, upload_service},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/upload-images",
    request_body(content = UploadImagesForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Public paths of the stored images", body = UploadedImages),
        (status = 400, description = "No file, more than 5 files, or a non-image file"),
        (status = 403, description = "Forbidden"),
    ),
    security(("admin_session" = [])),
    tag = "Uploads"
)]
pub async fn upload_images(
    State(state): State<AppState>,
    admin: AdminSession,
    multipart: Multipart,
) -> AppResult<Json<UploadedImages>> {
    let form = FormFields::collect_from(multipart).await?;
    let images = upload_service::upload_images(&state, &admin, form.files).await?;
    Ok(Json(UploadedImages { images }))
}

#[utoipa::path(
    post,
    path = "/products-with-images",
    request_body(content = ProductWithImagesForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created product; the first image is the primary one", body = Product),
        (status = 400, description = "Invalid field, more than 5 files, or a non-image file"),
        (status = 403, description = "Forbidden"),
    ),
    security(("admin_session" = [])),
    tag = "Uploads"
)]
pub async fn create_product_with_images(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> AppResult<Json<Product>> {
    // A header credential is checked before the body is read.
    let header_session = if headers.contains_key(&ADMIN_HEADER) {
        Some(state.admin_gate.authenticate_headers(&headers)?)
    } else {
        None
    };

    let mut form = FormFields::collect_from(multipart).await?;
    let legacy_credential = form.take_text_opt("admin_session");
    let admin = match header_session {
        Some(session) => session,
        None => legacy_session(&state, legacy_credential.as_deref())?,
    };

    let name = form.take_text("name")?;
    let description = form.take_text_opt("description").unwrap_or_default();
    let price = form
        .take_text("price")?
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest("price must be a number".to_string()))?;
    let draft = NewProduct::new(name, description, price, String::new(), Vec::new())?;

    let product =
        product_service::create_product_with_images(&state, &admin, draft, form.files).await?;
    Ok(Json(product))
}

fn legacy_session(state: &AppState, credential: Option<&str>) -> AppResult<AdminSession> {
    if credential.is_some() {
        tracing::warn!("admin credential sent as a form field; use the admin_session header");
    }
    state
        .admin_gate
        .authenticate(credential.map(str::as_bytes))
}
