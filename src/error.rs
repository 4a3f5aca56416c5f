//! Application error taxonomy and HTTP mapping.
//!
//! Client-input errors carry their specific message to the response; storage
//! and other internal failures collapse to a generic body, with the real
//! cause logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client supplied missing or malformed input (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No record matches the requested short code (404, plain text).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Storage uniqueness violation. Recovered internally by the shortening
    /// service; surfaces as a generic 500 if it ever escapes.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The collision-retry loop ran out of attempts (500, operator-actionable).
    #[error("Failed to generate unique short code")]
    CodeExhaustion,

    /// Unexpected storage or internal failure (500, generic message).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            AppError::CodeExhaustion => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to generate unique short code" })),
            )
                .into_response(),
            AppError::Conflict { message, details } => {
                tracing::error!(%message, %details, "unrecovered storage conflict");
                internal_server_error()
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error");
                internal_server_error()
            }
        }
    }
}

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    AppError::internal("Database error", json!({ "cause": e.to_string() }))
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}
