//! Ship entity model
//!
//! - `Ship`: the persisted record
//! - `NewShip`: a validated, rated record awaiting id assignment
//! - `ShipPayload`: sparse client input with explicit field presence
//! - `ShipOrder`: the whitelist of sortable fields

mod order;
mod payload;
mod ship;
mod ship_id;
mod ship_type;

pub use order::{ShipOrder, UnknownShipOrder};
pub use payload::{Patch, ShipPayload};
pub use ship::{NewShip, Ship};
pub use ship_id::{ParseShipIdError, ShipId};
pub use ship_type::{ShipType, UnknownShipType};
