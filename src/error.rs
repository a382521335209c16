use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Access denied: administrator authentication required")]
    Forbidden,

    #[error("At least one image is required")]
    NoFiles,

    #[error("Maximum {max} images allowed")]
    TooManyFiles { max: usize },

    #[error("File {0} is not an image")]
    InvalidFileType(String),

    #[error("Database error")]
    Storage(#[from] sea_orm::DbErr),

    #[error("File storage error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::NoFiles
            | AppError::TooManyFiles { .. }
            | AppError::InvalidFileType(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Storage(_)
            | AppError::Io(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Storage(err) => tracing::error!(error = %err, "database failure"),
            AppError::Io(err) => tracing::error!(error = %err, "file storage failure"),
            AppError::Serialization(err) => tracing::error!(error = %err, "serialization failure"),
            _ => {}
        }

        let message = self.to_string();
        let body = ApiResponse {
            message: message.clone(),
            data: Some(ErrorData { error: message }),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
