//! Mapping of use case errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::usecase::UseCaseError;

/// Error returned by HTTP handlers
#[derive(Debug)]
pub struct ApiError(pub UseCaseError);

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            UseCaseError::InvalidInput(e) => {
                tracing::warn!("Rejected input: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            UseCaseError::Store(e) => {
                tracing::error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage unavailable".to_string(),
                )
                    .into_response()
            }
        }
    }
}
