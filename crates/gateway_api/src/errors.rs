//! Error handling and HTTP error conversion
//!
//! This module defines how domain errors are translated to HTTP error
//! responses. Every error body has the shape
//! `{ "message": "<status> <reason>: <description>" }`.
//!
//! Upstream failures are logged server-side with their full detail, but the
//! response only ever carries the generic 500 message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gateway_core::{GatewayError, Resource};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Description used when an account lookup finds nothing.
pub const ACCOUNT_NOT_FOUND: &str = "El nombre de usuario proporcionado no existe.";

/// Description used when a repository lookup finds nothing.
pub const REPOSITORY_NOT_FOUND: &str = "El repositorio proporcionado no existe.";

/// Description used for every upstream failure other than not-found.
pub const INTERNAL_ERROR: &str = "Error del servidor al procesar la solicitud.";

/// Standard error response for all API errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status line followed by a human-readable description
    pub message: String,
}

impl ErrorResponse {
    /// Builds the message as `"<code> <canonical reason>: <description>"`.
    pub fn new(status: StatusCode, description: impl AsRef<str>) -> Self {
        Self {
            message: format!(
                "{} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                description.as_ref()
            ),
        }
    }
}

/// Axum response wrapper for gateway errors
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(State(state): State<AppState>) -> Result<Json<EnrichedAccount>, ApiError> {
///     let account = state.service.get_account("octocat", false).await?;
///     Ok(Json(account))
/// }
/// ```
#[derive(Debug)]
pub struct ApiError(GatewayError);

impl ApiError {
    /// The underlying domain error
    pub fn inner(&self) -> &GatewayError {
        &self.0
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = convert_error(&self.0);

        // Log error server-side
        log_error(&self.0, status);

        (status, Json(error_response)).into_response()
    }
}

/// Convert a domain error to an HTTP status code and error response
pub(crate) fn convert_error(error: &GatewayError) -> (StatusCode, ErrorResponse) {
    match error {
        GatewayError::Validation(err) => {
            let status = StatusCode::BAD_REQUEST;
            let description = format!("El parámetro {} no es válido.", err.value());
            (status, ErrorResponse::new(status, description))
        }
        GatewayError::NotFound { resource } => {
            let status = StatusCode::NOT_FOUND;
            let description = match resource {
                Resource::Account => ACCOUNT_NOT_FOUND,
                Resource::Repository => REPOSITORY_NOT_FOUND,
            };
            (status, ErrorResponse::new(status, description))
        }
        GatewayError::Upstream(_) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            (status, ErrorResponse::new(status, INTERNAL_ERROR))
        }
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &GatewayError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!("API error: {} - {}", status, error);
    } else {
        tracing::warn!("API error: {} - {}", status, error);
    }
}
