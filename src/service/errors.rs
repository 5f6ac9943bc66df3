//! Ship service errors
//!
//! Every variant is terminal for the request. None is retried.

use thiserror::Error;

use crate::model::{ParseShipIdError, ShipId};
use crate::storage::StoreError;
use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Malformed identifier, filter, or sort parameter
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Payload violates a field rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced ship does not exist
    #[error("Ship {0} is not found")]
    NotFound(ShipId),

    /// Store failure, passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        ServiceError::BadRequest(reason.into())
    }

    /// True for errors caused by the caller
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Store(_))
    }
}

impl From<ParseShipIdError> for ServiceError {
    fn from(err: ParseShipIdError) -> Self {
        ServiceError::BadRequest(err.to_string())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
