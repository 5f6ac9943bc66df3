//! Store error types

use thiserror::Error;

use crate::model::ShipId;

/// Failures raised by a ship store.
///
/// The service passes these through to the boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A reader or writer panicked while holding the lock
    #[error("Ship store lock poisoned")]
    LockPoisoned,

    /// `save` was called for a record the store does not hold
    #[error("Ship {0} is not stored")]
    Missing(ShipId),

    /// No positive id is left to assign
    #[error("Ship id space exhausted")]
    IdsExhausted,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
