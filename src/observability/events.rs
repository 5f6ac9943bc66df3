//! Observable events
//!
//! Events are explicit and typed. Their string names are stable and appear
//! in the `event` field of every log line.

use std::fmt;

/// Observable events in shipyard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Listening for requests
    Serving,
    /// Shutdown complete
    ShutdownComplete,

    // Writes
    /// Ship stored with a new id
    ShipCreated,
    /// Ship edited and re-rated
    ShipUpdated,
    /// Ship removed
    ShipDeleted,

    // Reads
    /// List or count finished
    QueryExecuted,

    // Rejections
    /// Request refused with a client or not-found error
    RequestRejected,
    /// Store failure surfaced to the caller
    StoreFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "SHIPYARD_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "SHIPYARD_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::ShipCreated => "SHIP_CREATED",
            Event::ShipUpdated => "SHIP_UPDATED",
            Event::ShipDeleted => "SHIP_DELETED",

            Event::QueryExecuted => "QUERY_COMPLETE",

            Event::RequestRejected => "REQUEST_REJECTED",
            Event::StoreFailed => "STORE_FAILED",
        }
    }

    /// Returns true if the event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::RequestRejected | Event::StoreFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
