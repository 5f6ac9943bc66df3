//! Ship payload validation
//!
//! Create: every required field must be present (checked first, in field
//! order), then every value rule is checked in the same order.
//!
//! Edit: only fields present in the payload are checked, each on its own.
//! An explicit null is never accepted.
//!
//! The validator never mutates its input; it produces typed values that the
//! service merges and rates.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use super::errors::{ValidationError, ValidationResult};
use crate::model::{NewShip, Patch, Ship, ShipPayload, ShipType};
use crate::rating;

pub const MIN_TEXT_LEN: usize = 1;
pub const MAX_TEXT_LEN: usize = 50;
pub const MIN_PROD_YEAR: i32 = 2800;
pub const MAX_PROD_YEAR: i32 = rating::CURRENT_YEAR;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const MIN_CREW_SIZE: i64 = 1;
pub const MAX_CREW_SIZE: i64 = 9999;

/// Field values of a ship that passed create validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: u32,
}

impl ValidatedShip {
    pub fn prod_year(&self) -> i32 {
        self.prod_date.year()
    }

    pub fn with_rating(self, rating: f64) -> NewShip {
        NewShip {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating,
        }
    }
}

/// Validated fields of an edit. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipChanges {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub prod_date: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<u32>,
}

impl ShipChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlays the present fields onto `ship`. Does not touch the rating.
    pub fn apply_to(self, ship: &mut Ship) {
        if let Some(name) = self.name {
            ship.name = name;
        }
        if let Some(planet) = self.planet {
            ship.planet = planet;
        }
        if let Some(ship_type) = self.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(prod_date) = self.prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = self.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = self.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = self.crew_size {
            ship.crew_size = crew_size;
        }
    }
}

/// Stateless validator for ship payloads
pub struct ShipValidator;

impl ShipValidator {
    /// Validates a full payload for creation.
    ///
    /// `isUsed` defaults to `false` when omitted or null.
    pub fn validate_create(payload: &ShipPayload) -> ValidationResult<ValidatedShip> {
        let name = required(&payload.name, "name")?;
        let planet = required(&payload.planet, "planet")?;
        let ship_type = required(&payload.ship_type, "shipType")?;
        let prod_date = required(&payload.prod_date, "prodDate")?;
        let speed = required(&payload.speed, "speed")?;
        let crew_size = required(&payload.crew_size, "crewSize")?;

        Ok(ValidatedShip {
            name: Self::check_text("name", name)?,
            planet: Self::check_text("planet", planet)?,
            ship_type: Self::check_ship_type(ship_type)?,
            prod_date: Self::check_prod_date(*prod_date)?,
            speed: Self::check_speed(*speed)?,
            crew_size: Self::check_crew_size(*crew_size)?,
            is_used: match payload.is_used {
                Patch::Value(is_used) => is_used,
                Patch::Absent | Patch::Null => false,
            },
        })
    }

    /// Validates the fields present in an edit payload.
    pub fn validate_update(payload: &ShipPayload) -> ValidationResult<ShipChanges> {
        Ok(ShipChanges {
            name: optional(&payload.name, "name", |v| Self::check_text("name", v))?,
            planet: optional(&payload.planet, "planet", |v| Self::check_text("planet", v))?,
            ship_type: optional(&payload.ship_type, "shipType", |v| Self::check_ship_type(v))?,
            prod_date: optional(&payload.prod_date, "prodDate", |v| Self::check_prod_date(*v))?,
            is_used: optional(&payload.is_used, "isUsed", |v| Ok(*v))?,
            speed: optional(&payload.speed, "speed", |v| Self::check_speed(*v))?,
            crew_size: optional(&payload.crew_size, "crewSize", |v| Self::check_crew_size(*v))?,
        })
    }

    /// Text length in characters must lie in [1, 50]
    pub fn check_text(field: &'static str, value: &str) -> ValidationResult<String> {
        let len = value.chars().count();
        if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
            return Err(ValidationError::out_of_range(
                field,
                format!("length in [{}, {}]", MIN_TEXT_LEN, MAX_TEXT_LEN),
                format!("length {}", len),
            ));
        }
        Ok(value.to_string())
    }

    pub fn check_ship_type(value: &str) -> ValidationResult<ShipType> {
        value.parse().map_err(|_| {
            let known: Vec<&str> = ShipType::ALL.iter().map(|t| t.as_str()).collect();
            ValidationError::new(
                "shipType",
                format!("one of {}", known.join(", ")),
                format!("'{}'", value),
            )
        })
    }

    /// Production year (UTC) must lie in [2800, 3019]
    pub fn check_prod_date(millis: i64) -> ValidationResult<DateTime<Utc>> {
        let date = Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
            ValidationError::new("prodDate", "a representable timestamp", millis.to_string())
        })?;

        let year = date.year();
        if !(MIN_PROD_YEAR..=MAX_PROD_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range(
                "prodDate",
                format!("year in [{}, {}]", MIN_PROD_YEAR, MAX_PROD_YEAR),
                format!("year {}", year),
            ));
        }
        Ok(date)
    }

    pub fn check_speed(value: f64) -> ValidationResult<f64> {
        // NaN fails `contains`
        if !(MIN_SPEED..=MAX_SPEED).contains(&value) {
            return Err(ValidationError::out_of_range(
                "speed",
                format!("value in [{}, {}]", MIN_SPEED, MAX_SPEED),
                value,
            ));
        }
        Ok(value)
    }

    pub fn check_crew_size(value: i64) -> ValidationResult<u32> {
        if !(MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&value) {
            return Err(ValidationError::out_of_range(
                "crewSize",
                format!("value in [{}, {}]", MIN_CREW_SIZE, MAX_CREW_SIZE),
                value,
            ));
        }
        u32::try_from(value).map_err(|_| ValidationError::out_of_range("crewSize", "u32", value))
    }
}

/// Presence check for create
fn required<'p, T>(patch: &'p Patch<T>, field: &'static str) -> ValidationResult<&'p T> {
    match patch {
        Patch::Value(v) => Ok(v),
        Patch::Absent => Err(ValidationError::missing_field(field)),
        Patch::Null => Err(ValidationError::null_value(field)),
    }
}

/// Value check for edit, skipped when the field is absent
fn optional<T, U>(
    patch: &Patch<T>,
    field: &'static str,
    check: impl FnOnce(&T) -> ValidationResult<U>,
) -> ValidationResult<Option<U>> {
    match patch {
        Patch::Absent => Ok(None),
        Patch::Null => Err(ValidationError::null_value(field)),
        Patch::Value(v) => check(v).map(Some),
    }
}
