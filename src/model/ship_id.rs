//! Ship identifiers
//!
//! Identifiers are positive integers assigned by the store. The external
//! string form is parsed here, before any lookup happens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Positive, store-assigned ship identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ShipId(u64);

impl ShipId {
    /// Wraps a raw identifier. Returns `None` for zero.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for ShipId {
    type Error = ParseShipIdError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(ParseShipIdError::NotPositive(0))
    }
}

impl From<ShipId> for u64 {
    fn from(id: ShipId) -> Self {
        id.0
    }
}

/// Why an external identifier was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseShipIdError {
    #[error("ID is empty")]
    Empty,

    #[error("ID '{0}' is not a number")]
    NotANumber(String),

    #[error("ID {0} is less than or equal to zero")]
    NotPositive(i64),
}

impl FromStr for ShipId {
    type Err = ParseShipIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseShipIdError::Empty);
        }

        let raw: i64 = s
            .parse()
            .map_err(|_| ParseShipIdError::NotANumber(s.to_string()))?;

        if raw <= 0 {
            return Err(ParseShipIdError::NotPositive(raw));
        }

        Ok(Self(raw as u64))
    }
}
