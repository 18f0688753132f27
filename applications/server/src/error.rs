/// Server error types
use crate::services::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Client-facing message for 400 responses
pub const INVALID_REQUEST: &str = "Invalid request";
/// Client-facing message for 404 responses
pub const NOT_FOUND: &str = "Resource not found";
/// Client-facing message for 408 responses
pub const REQUEST_TIMEOUT: &str = "Request timeout";
/// Client-facing message for 500 responses
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Errors surfaced by the HTTP layer
///
/// Every variant renders as `{"error": "<message>"}` with one fixed message
/// per status class. The carried detail is only ever logged.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Storage error: {0}")]
    Storage(#[from] starter_storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::Service(ServiceError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ServerError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Service(ServiceError::Store { .. })
            | ServerError::Internal(_)
            | ServerError::Config(_)
            | ServerError::Storage(_)
            | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match status {
            StatusCode::BAD_REQUEST => {
                tracing::warn!(error = %self, "Bad request");
                INVALID_REQUEST
            }
            StatusCode::NOT_FOUND => {
                tracing::debug!(error = %self, "Not found");
                NOT_FOUND
            }
            StatusCode::REQUEST_TIMEOUT => {
                tracing::warn!("Request exceeded the configured timeout");
                REQUEST_TIMEOUT
            }
            _ => {
                tracing::error!(error = ?self, "Server error");
                INTERNAL_ERROR
            }
        };

        (status, error_body(message)).into_response()
    }
}

/// JSON body shared by every error response
pub fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(json!({ "error": message }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use starter_core::StarterError;

    #[test]
    fn service_errors_map_to_status_classes() {
        let not_found = ServerError::from(ServiceError::NotFound(3));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = ServerError::from(ServiceError::InvalidInput("email".into()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let store = ServerError::from(ServiceError::Store {
            operation: "get user",
            source: StarterError::Database("disk I/O error".into()),
        });
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn internal_detail_is_not_exposed() {
        let response = ServerError::Internal("connection refused on 10.0.0.3".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Internal server error" }));
    }

    #[test]
    fn timeout_maps_to_408() {
        assert_eq!(ServerError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
