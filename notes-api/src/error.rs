//! HTTP error mapping

use crate::http::types::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_core::core_notes::{NoteServiceError, ValidationError};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NoteServiceError> for ApiError {
    fn from(err: NoteServiceError) -> Self {
        match err {
            NoteServiceError::Validation(e) => ApiError::Validation(e),
            NoteServiceError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(e) => ErrorResponse {
                error: "Validation failed".to_string(),
                field: Some(e.field().to_string()),
                details: Some(e.to_string()),
            },
            ApiError::NotFound(id) => ErrorResponse {
                error: "Note not found".to_string(),
                field: None,
                details: Some(format!("No note with id '{}'", id)),
            },
            ApiError::BadRequest(details) => ErrorResponse {
                error: "Bad request".to_string(),
                field: None,
                details: Some(details),
            },
            ApiError::Internal(e) => {
                error!(error = %e, "Request failed");
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    field: None,
                    details: None,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation: ApiError = NoteServiceError::Validation(ValidationError::Blank {
            field: "title",
        })
        .into();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = NoteServiceError::NotFound("abc".into()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        assert_eq!(
            ApiError::BadRequest("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response = ApiError::Internal(anyhow::anyhow!("secret")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
