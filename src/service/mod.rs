//! Ship service
//!
//! The only component allowed to mutate ships. Exposes create, edit,
//! delete, get, list and count to the boundary layer.

mod errors;
mod ship_service;

pub use errors::{ServiceError, ServiceResult};
pub use ship_service::{parse_id, ShipService};
