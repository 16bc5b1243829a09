use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::CatalogError;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Body of every 500; the underlying error only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match &e {
            CatalogError::Validation(_) | CatalogError::InvalidArgument(_) => {
                AppError::bad_request(e.to_string())
            }
            _ => {
                tracing::error!(error = %e, "request failed");
                AppError::internal(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
