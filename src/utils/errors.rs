use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Application error kinds.
///
/// Business failures (validation, conflict, not-found, authorization) are
/// kept distinct from store failures so that a broken database surfaces as
/// 5xx while a violated business rule stays 4xx.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing request fields, surfaced as a list of messages.
    Validation(Vec<String>),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    /// Business-rule conflict, e.g. registering an email that already exists.
    Conflict(String),
    /// The store rejected or failed the operation for a non-business reason.
    Database(anyhow::Error),
    Internal(anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": messages }))
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::Database(err) => {
                error!(error = %err, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Store unavailable" }),
                )
            }
            AppError::Internal(err) => {
                error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.into())
    }
}
