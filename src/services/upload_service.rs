use std::{collections::HashSet, time::Duration};

use sea_orm::EntityTrait;
use serde::Serialize;

use crate::{
    entity::products::Entity as Products,
    error::AppResult,
    middleware::auth::AdminSession,
    services::product_service::decode_images,
    state::AppState,
    uploads::{IncomingFile, stored_name_of},
};

#[derive(Debug, Default, Serialize)]
pub struct SweepReport {
    pub scanned: usize,
    pub kept: usize,
    pub removed: Vec<String>,
}

pub async fn upload_images(
    state: &AppState,
    _admin: &AdminSession,
    files: Vec<IncomingFile>,
) -> AppResult<Vec<String>> {
    let paths = state.images.ingest(files).await?;
    tracing::info!(count = paths.len(), "images uploaded");
    Ok(paths)
}

/// Deletes uploads no product references, sparing files younger than `grace`
/// so that an upload waiting for its product insert survives.
pub async fn sweep_orphans(state: &AppState, grace: Duration) -> AppResult<SweepReport> {
    let referenced = referenced_uploads(state).await?;
    let mut report = SweepReport::default();

    let mut entries = tokio::fs::read_dir(state.images.dir()).await?;
    while let Some(entry) = entries.next_entry().await? {
        let metadata = entry.metadata().await?;
        if !metadata.is_file() {
            continue;
        }
        report.scanned += 1;

        let name = entry.file_name().to_string_lossy().into_owned();
        // A modification time in the future reads as brand new.
        let age = metadata
            .modified()?
            .elapsed()
            .unwrap_or(Duration::ZERO);
        if referenced.contains(&name) || age < grace {
            report.kept += 1;
            continue;
        }

        tokio::fs::remove_file(entry.path()).await?;
        tracing::info!(file = %name, "orphaned upload removed");
        report.removed.push(name);
    }

    Ok(report)
}

async fn referenced_uploads(state: &AppState) -> AppResult<HashSet<String>> {
    let mut names = HashSet::new();
    for product in Products::find().all(&state.orm).await? {
        let images = decode_images(product.images.as_deref())?;
        for path in std::iter::once(&product.image_url).chain(images.iter()) {
            if let Some(name) = stored_name_of(path) {
                names.insert(name.to_string());
            }
        }
    }
    Ok(names)
}
