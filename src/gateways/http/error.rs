//! Error responses for the HTTP gateway.

use crate::domain::OrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "unable to process order";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent a quantity the allocator rejects.
    #[error("{0}")]
    InvalidArgument(String),

    /// Anything else. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        if err.is_invalid_argument() {
            ApiError::InvalidArgument(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match self {
            Self::InvalidArgument(message) => message,
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
