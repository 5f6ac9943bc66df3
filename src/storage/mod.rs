//! Ship storage
//!
//! The service talks to storage only through `ShipStore`. The bundled
//! `InMemoryShipStore` keeps records in a `BTreeMap` behind a `RwLock`;
//! each write holds the write lock for exactly one record.

mod errors;
mod in_memory;
mod store;

pub use errors::{StoreError, StoreResult};
pub use in_memory::InMemoryShipStore;
pub use store::ShipStore;
