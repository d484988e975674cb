//! Request handlers

mod reflection;

pub use reflection::*;

use crate::error::ApiError;
use axum::Json;
use serde::Serialize;

/// Generic `{"message": ...}` response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Root liveness endpoint
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from FastAPI!",
    })
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
