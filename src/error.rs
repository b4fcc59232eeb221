//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::chat::ChatError;
use crate::inference::artifacts::ArtifactError;

pub type AppResult<T> = Result<T, AppError>;

/// Request-boundary failures.
///
/// Every variant is surfaced as HTTP 200 with `{"success": false,
/// "error": <message>}`. Clients inspect the `success` field, not the
/// transport status.
#[derive(Debug)]
pub enum AppError {
    /// Missing or non-numeric feature field
    InvalidInput(String),

    /// Scaler or model artifact failed to load
    ArtifactUnavailable(String),

    /// Chat message blank after trimming
    EmptyMessage,

    /// Chat API transport/auth/quota failure
    ExternalServiceFailure(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::EmptyMessage => "Message cannot be empty".to_string(),
            AppError::ArtifactUnavailable(detail) => {
                tracing::error!("Artifact load failed: {}", detail);
                "Models not found or cannot be loaded".to_string()
            }
            AppError::ExternalServiceFailure(detail) => {
                tracing::error!("Chat service failure: {}", detail);
                format!("AI service error: {}", detail)
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (StatusCode::OK, body).into_response()
    }
}

impl From<ArtifactError> for AppError {
    fn from(err: ArtifactError) -> Self {
        AppError::ArtifactUnavailable(err.to_string())
    }
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        AppError::ExternalServiceFailure(err.to_string())
    }
}
