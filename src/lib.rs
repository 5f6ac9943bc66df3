//! shipyard - a ship catalog service
//!
//! Validated ship records with a derived rating, composable query filters,
//! paging and sorting, behind a small REST surface.

pub mod cli;
pub mod config;
pub mod executor;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rating;
pub mod rest_api;
pub mod service;
pub mod storage;
pub mod validation;
