//! Sort whitelist for ship listings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fields a listing may be ordered by. Ordering is always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Name,
    Planet,
    Date,
    Speed,
    CrewSize,
    Rating,
}

impl ShipOrder {
    pub const ALL: [ShipOrder; 7] = [
        ShipOrder::Id,
        ShipOrder::Name,
        ShipOrder::Planet,
        ShipOrder::Date,
        ShipOrder::Speed,
        ShipOrder::CrewSize,
        ShipOrder::Rating,
    ];

    /// Wire name accepted in the `order` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipOrder::Id => "ID",
            ShipOrder::Name => "NAME",
            ShipOrder::Planet => "PLANET",
            ShipOrder::Date => "DATE",
            ShipOrder::Speed => "SPEED",
            ShipOrder::CrewSize => "CREW_SIZE",
            ShipOrder::Rating => "RATING",
        }
    }
}

impl fmt::Display for ShipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}'")]
pub struct UnknownShipOrder(pub String);

impl FromStr for ShipOrder {
    type Err = UnknownShipOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| UnknownShipOrder(s.to_string()))
    }
}
