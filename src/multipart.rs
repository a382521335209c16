use std::collections::HashMap;

use axum::extract::Multipart;

use crate::{
    error::{AppError, AppResult},
    uploads::IncomingFile,
};

/// Every field of a `multipart/form-data` body, buffered in memory.
#[derive(Debug, Default)]
pub struct FormFields {
    pub text: HashMap<String, String>,
    pub files: Vec<IncomingFile>,
}

impl FormFields {
    /// Drains `multipart`. Parts carrying a file name are files, the rest are text.
    pub async fn collect_from(mut multipart: Multipart) -> AppResult<Self> {
        let mut fields = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("multipart error: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read field {name}: {e}")))?;

            match file_name {
                // Browsers send an empty part when no file was picked.
                Some(file_name) if file_name.is_empty() && data.is_empty() => {}
                Some(file_name) => fields.files.push(IncomingFile {
                    file_name: Some(file_name),
                    content_type,
                    data,
                }),
                None => {
                    let value = String::from_utf8(data.to_vec()).map_err(|_| {
                        AppError::BadRequest(format!("field {name} is not valid UTF-8"))
                    })?;
                    fields.text.entry(name).or_insert(value);
                }
            }
        }

        Ok(fields)
    }

    pub fn take_text(&mut self, name: &str) -> AppResult<String> {
        self.text
            .remove(name)
            .ok_or_else(|| AppError::BadRequest(format!("missing required field: {name}")))
    }

    pub fn take_text_opt(&mut self, name: &str) -> Option<String> {
        self.text.remove(name)
    }
}
