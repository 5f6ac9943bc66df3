//! ShipStore - the collection store consumed by the ship service.

use super::errors::StoreResult;
use crate::executor::{Page, PageRequest, ShipFilter};
use crate::model::{NewShip, Ship, ShipId};

/// Persistence for ship records.
///
/// Implementations own physical storage and id assignment. Every write is
/// atomic for a single record: readers see a record either before or after
/// a write, never in between.
pub trait ShipStore: Send + Sync {
    fn find_by_id(&self, id: ShipId) -> StoreResult<Option<Ship>>;

    fn exists_by_id(&self, id: ShipId) -> StoreResult<bool>;

    /// Stores a new ship under a freshly assigned id.
    fn insert(&self, ship: NewShip) -> StoreResult<Ship>;

    /// Replaces an existing ship. Fails with `StoreError::Missing` if it
    /// is not stored.
    fn save(&self, ship: Ship) -> StoreResult<Ship>;

    /// Removes a ship. Returns true if it existed.
    fn delete(&self, id: ShipId) -> StoreResult<bool>;

    /// One sorted page of the ships matching `filter`.
    fn query_by_predicate(&self, filter: &ShipFilter, request: &PageRequest)
        -> StoreResult<Page<Ship>>;

    /// Number of ships matching `filter`.
    fn count_by_predicate(&self, filter: &ShipFilter) -> StoreResult<usize>;
}
