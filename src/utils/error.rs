use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

use crate::services::{ClassificationError, DocumentError};

#[derive(Debug)]
pub enum AppError {
    ProviderError(String),
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ProviderError(msg) => write!(f, "Provider error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ClassificationError> for AppError {
    fn from(err: ClassificationError) -> Self {
        match err {
            ClassificationError::Provider(e) => AppError::ProviderError(e.to_string()),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::ValidationError(format!("Invalid multipart body: {}", err.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ProviderError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = json!({
            "error": error_message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ia_service::IaServiceError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::from(ClassificationError::EmptyText).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_maps_to_internal_error() {
        let err = ClassificationError::Provider(IaServiceError::EmptyResponse);
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_document_errors_are_client_errors() {
        let err = AppError::from(DocumentError::UnsupportedType("docx".to_string()));
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
