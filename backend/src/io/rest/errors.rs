//! Translation of handler failures into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorResponse, FieldViolation, ValidationErrorResponse};
use thiserror::Error;
use tracing::error;

use crate::storage::GatewayError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more field rules failed
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),
    /// A required query parameter was absent or blank
    #[error("{0}")]
    MissingParameter(&'static str),
    /// The body passed validation but does not fit the request type
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Database(#[from] GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors })).into_response()
            }
            ApiError::MissingParameter(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::MalformedBody(reason) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(reason))).into_response()
            }
            ApiError::Database(e) => {
                // The driver error stays in the server log
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
