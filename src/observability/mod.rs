//! Observability subsystem for shipyard
//!
//! Structured logging through `tracing`, keyed by typed lifecycle and
//! domain events.
//!
//! # Usage
//!
//! ```ignore
//! use shipyard::observability::{init_logging, log_event, Event, LogFormat};
//!
//! init_logging(LogFormat::Json, "info");
//! log_event(Event::BootStart);
//! tracing::info!(event = %Event::ShipCreated, id = 7, "ship stored");
//! ```
//!
//! Logging never affects the result of an operation.

mod events;
mod logging;

pub use events::Event;
pub use logging::{init_logging, LogFormat};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::warn!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}
