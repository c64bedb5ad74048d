//! API error mapping.
//!
//! The engines never reject input, so every client mistake is caught here
//! at the boundary and mapped to a 400 before any pricing work starts.
//! Anything unexpected during computation becomes a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

use pricer_core::ContractError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed boundary validation; the client can fix and retry.
    #[error("{0}")]
    Validation(String),

    /// Unexpected server-side failure during computation.
    #[error("Error during simulation")]
    Internal,
}

impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// JSON error body, `{"error": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError::Validation("missing field".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn contract_error_converts_to_validation() {
        let err: ApiError = ContractError::InvalidSpot(-1.0).into();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
