//! Validation engine for ship payloads
//!
//! Presence rules apply on create only; value rules apply to every field a
//! payload carries. The first violated rule is reported.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{
    ShipChanges, ShipValidator, ValidatedShip, MAX_CREW_SIZE, MAX_PROD_YEAR, MAX_SPEED,
    MAX_TEXT_LEN, MIN_CREW_SIZE, MIN_PROD_YEAR, MIN_SPEED, MIN_TEXT_LEN,
};
