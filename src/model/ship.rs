//! The ship record

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use super::{ShipId, ShipType};

/// A persisted ship.
///
/// `rating` is derived from `speed`, `prod_date` and `is_used`; it is never
/// taken from a client payload. Ships are only ever serialized: inbound
/// data arrives as a `ShipPayload`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: ShipId,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: u32,
    pub rating: f64,
}

impl Ship {
    /// Calendar year of production (UTC)
    pub fn prod_year(&self) -> i32 {
        self.prod_date.year()
    }
}

/// A validated, rated ship that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: u32,
    pub rating: f64,
}

impl NewShip {
    /// Attaches the store-assigned id
    pub fn into_ship(self, id: ShipId) -> Ship {
        Ship {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: self.rating,
        }
    }
}
