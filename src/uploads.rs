//! Image intake: validates uploaded files and stores them under generated names.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const MAX_FILES: usize = 5;
pub const PUBLIC_BASE: &str = "/uploads";

/// A file received from a multipart form, before validation.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl IncomingFile {
    fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("<unnamed>")
    }

    fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

#[derive(Debug, Clone)]
pub struct ImageIntake {
    dir: PathBuf,
}

impl ImageIntake {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Stores each file and returns its public path, in input order.
    ///
    /// The batch size is checked before anything is written. Files are then
    /// validated and written one at a time; a non-image stops the batch but files
    /// already written stay on disk until the orphan sweep removes them.
    pub async fn ingest(&self, files: Vec<IncomingFile>) -> AppResult<Vec<String>> {
        if files.is_empty() {
            return Err(AppError::NoFiles);
        }
        if files.len() > MAX_FILES {
            return Err(AppError::TooManyFiles { max: MAX_FILES });
        }

        let mut paths = Vec::with_capacity(files.len());
        for file in files {
            if !file.is_image() {
                return Err(AppError::InvalidFileType(file.display_name().to_string()));
            }

            let stored = stored_name(file.file_name.as_deref());
            tokio::fs::write(self.dir.join(&stored), &file.data).await?;
            tracing::debug!(
                original = file.display_name(),
                stored = %stored,
                bytes = file.data.len(),
                "image stored"
            );
            paths.push(public_path(&stored));
        }

        Ok(paths)
    }
}

pub fn public_path(stored: &str) -> String {
    format!("{PUBLIC_BASE}/{stored}")
}

/// Maps a public path back to the stored file name, if it points into the upload area.
pub fn stored_name_of(public: &str) -> Option<&str> {
    public
        .strip_prefix(PUBLIC_BASE)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

fn stored_name(original: Option<&str>) -> String {
    let id = Uuid::new_v4();
    match original.and_then(extension_of) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// Extension of the last path component, reduced to lower-case ASCII alphanumerics.
fn extension_of(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let (_, ext) = base.rsplit_once('.')?;
    let ext: String = ext
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!ext.is_empty()).then_some(ext)
}
