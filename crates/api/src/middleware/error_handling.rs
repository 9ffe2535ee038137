//! # Error Handling Middleware
//!
//! Maps domain errors onto HTTP status codes and JSON error responses so
//! every endpoint reports failures the same way. Validation failures carry
//! the per-field message map so clients can display all errors at once.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use openslot_core::errors::SlotError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain [`SlotError`] instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotError::InvalidState { .. } => StatusCode::CONFLICT,
            SlotError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Format the error message as JSON; validation errors also carry
        // the field map
        let message = self.0.to_string();
        let body = match &self.0 {
            SlotError::Validation(fields) => {
                Json(json!({ "error": message, "fields": fields }))
            }
            _ => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, SlotError>` inside
/// handlers that return `Result<T, AppError>`.
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Wraps raw store errors in the persistence variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::Persistence(err))
    }
}
