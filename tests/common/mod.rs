#![allow(dead_code)]

use std::path::Path;

use axum::body::Bytes;
use sea_orm::{ConnectOptions, Database};
use secrecy::SecretString;
use storefront_api::{
    db::run_migrations,
    dto::products::ProductPayload,
    middleware::auth::{AdminGate, AdminSession},
    models::Product,
    services::product_service,
    state::AppState,
    uploads::{ImageIntake, IncomingFile},
};
use tempfile::TempDir;

pub const ADMIN_SECRET: &str = "test-admin-secret";

/// Fresh in-memory database plus a temporary upload directory.
///
/// The `TempDir` must outlive the state or the upload directory disappears.
pub async fn setup_state() -> anyhow::Result<(AppState, TempDir)> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;

    let upload_dir = tempfile::tempdir()?;
    let state = AppState {
        orm,
        admin_gate: AdminGate::new(SecretString::from(ADMIN_SECRET)),
        images: ImageIntake::new(upload_dir.path()),
    };
    Ok((state, upload_dir))
}

pub fn admin(state: &AppState) -> AdminSession {
    state
        .admin_gate
        .authenticate(Some(ADMIN_SECRET.as_bytes()))
        .expect("admin session")
}

pub fn payload(name: &str, description: &str, price: f64) -> ProductPayload {
    ProductPayload {
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        image_url: String::new(),
        images: None,
    }
}

pub async fn seed_product(
    state: &AppState,
    name: &str,
    description: &str,
    price: f64,
) -> anyhow::Result<Product> {
    let draft = payload(name, description, price).into_draft()?;
    Ok(product_service::create_product(state, &admin(state), draft).await?)
}

pub fn image(file_name: &str, content_type: &str, data: &'static [u8]) -> IncomingFile {
    IncomingFile {
        file_name: Some(file_name.to_string()),
        content_type: Some(content_type.to_string()),
        data: Bytes::from_static(data),
    }
}

pub fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("read upload dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .count()
}
