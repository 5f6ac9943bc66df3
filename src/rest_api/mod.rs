//! # Ship REST API Module
//!
//! HTTP boundary for the ship service: query parameter parsing, route
//! handlers, and error-to-status mapping.

pub mod errors;
pub mod parser;
pub mod routes;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use parser::{parse_filters, ListQuery};
pub use routes::{ship_routes, ShipState};
