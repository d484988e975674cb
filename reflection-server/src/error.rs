//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reflection_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is missing, undecodable or has the wrong shape
    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

/// Body of a 422 response
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub detail: ValidationError,
}

/// Body of any other error response
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejecting request: {}", self);
        let status = self.status();
        match self {
            ApiError::Validation(detail) => (status, Json(ValidationBody { detail })).into_response(),
            other => (
                status,
                Json(MessageBody {
                    detail: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
