use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::API_NAME;
use crate::query::ValidationError;
use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Store failure. Only `context` reaches the client.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl AppError {
    pub fn store(context: &'static str) -> impl FnOnce(RepositoryError) -> AppError {
        move |source| AppError::Store { context, source }
    }
}

// Extractor rejections carry axum's plain-text body; route them through the
// JSON error shape instead.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(e) => {
                tracing::warn!("{} Validation error: {}", API_NAME, e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("{} Bad request: {}", API_NAME, msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::warn!("{} Not found: {}", API_NAME, msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Store { context, source } => {
                tracing::error!("{} {}: {}", API_NAME, context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}
