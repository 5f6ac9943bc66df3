//! # HTTP Server Module
//!
//! Combines the ship routes and the health check into one Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/rest/ships/*` - Ship catalog

pub mod health_routes;
pub mod server;

pub use health_routes::{health_routes, HealthResponse};
pub use server::HttpServer;
