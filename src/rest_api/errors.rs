//! # REST API Errors
//!
//! Maps service errors to HTTP status codes and a JSON error body.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::observability::Event;
use crate::service::ServiceError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Request body is not a valid ship payload
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Service Errors
    // ==================
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::Service(ServiceError::BadRequest(_)) => StatusCode::BAD_REQUEST,
            RestError::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Service(ServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True when the caller sent something wrong
    pub fn is_client_error(&self) -> bool {
        match self {
            RestError::Service(err) => err.is_client_error(),
            RestError::InvalidQueryParam(_) | RestError::InvalidBody(_) => true,
        }
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::InvalidQueryParam(rejection.body_text())
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::InvalidBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_client_error() {
            warn!(event = %Event::RequestRejected, status = status.as_u16(), error = %self);
        } else {
            error!(event = %Event::StoreFailed, status = status.as_u16(), error = %self);
        }

        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
