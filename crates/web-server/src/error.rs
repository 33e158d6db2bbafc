use crate::validation::ValidationError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Article doesn't exist")]
    ArticleNotFound,
    /// The request could not be extracted (malformed JSON, oversized body, bad path
    /// parameter, ...). Carries the extractor's own status code.
    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every error body has the shape `{ "error": { "message": "..." } }`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::ArticleNotFound => (
                StatusCode::NOT_FOUND,
                "Article doesn't exist".to_string(),
            ),
            AppError::Rejected(status, message) => (status, message),
        };

        let body = Json(json!({ "error": { "message": error_message } }));
        (status, body).into_response()
    }
}
