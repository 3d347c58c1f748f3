use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::portfolio::actions::StoreError;
use crate::portfolio::uploads::UploadError;
use crate::render::export::{ExportError, SizeWarning};
use crate::render::registry::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("{0}")]
    UnknownTemplate(String),

    #[error("Export exceeds size limit")]
    ExportTooLarge(SizeWarning),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Text enhancement is not configured")]
    EnhancementUnavailable,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::UnknownTemplate(e.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::ExportFailed(e.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ItemNotFound { .. } => AppError::NotFound(e.to_string()),
            _ => AppError::Validation(e.to_string()),
        }
    }
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        match e {
            UploadError::UnsupportedType(_) => AppError::UnsupportedMedia(e.to_string()),
            _ => AppError::Validation(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedMedia(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
            ),
            AppError::UnknownTemplate(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNKNOWN_TEMPLATE",
                msg.clone(),
            ),
            AppError::ExportTooLarge(warning) => {
                // Carries the numbers the client needs for its confirmation prompt.
                let body = Json(json!({
                    "error": {
                        "code": "EXPORT_SIZE_WARNING",
                        "message": warning.message,
                        "sizeBytes": warning.size_bytes,
                        "sizeMb": warning.size_mb,
                        "limitMb": warning.limit_mb
                    }
                }));
                return (StatusCode::CONFLICT, body).into_response();
            }
            AppError::ExportFailed(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_FAILED",
                    "Failed to export the portfolio. Please try again.".to_string(),
                )
            }
            AppError::EnhancementUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ENHANCEMENT_UNAVAILABLE",
                "AI service is not configured. Set ANTHROPIC_API_KEY to enable it.".to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "Failed to connect to AI service.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::UnknownTemplate("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::ExportFailed("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::EnhancementUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                AppError::Llm(LlmError::EmptyContent),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_store_error_mapping() {
        let missing: AppError = StoreError::ItemNotFound {
            list: "projects",
            id: "p9".into(),
        }
        .into();
        assert!(matches!(missing, AppError::NotFound(_)));

        let order: AppError = StoreError::InvalidSectionOrder.into();
        assert!(matches!(order, AppError::Validation(_)));
    }
}
