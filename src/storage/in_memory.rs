//! InMemoryShipStore - BTreeMap-backed ship store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::store::ShipStore;
use crate::executor::{Page, PageRequest, QueryExecutor, ShipFilter};
use crate::model::{NewShip, Ship, ShipId};

#[derive(Default)]
struct Collection {
    ships: BTreeMap<ShipId, Ship>,
    /// Last id handed out. Ids are never reused, even after a delete.
    last_id: u64,
}

/// In-memory ship store. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryShipStore {
    inner: Arc<RwLock<Collection>>,
}

impl InMemoryShipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ships
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.ships.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.ships.is_empty())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collection>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collection>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ShipStore for InMemoryShipStore {
    fn find_by_id(&self, id: ShipId) -> StoreResult<Option<Ship>> {
        Ok(self.read()?.ships.get(&id).cloned())
    }

    fn exists_by_id(&self, id: ShipId) -> StoreResult<bool> {
        Ok(self.read()?.ships.contains_key(&id))
    }

    fn insert(&self, ship: NewShip) -> StoreResult<Ship> {
        let mut collection = self.write()?;

        let next = collection
            .last_id
            .checked_add(1)
            .and_then(ShipId::new)
            .ok_or(StoreError::IdsExhausted)?;

        let ship = ship.into_ship(next);
        collection.last_id = next.get();
        collection.ships.insert(next, ship.clone());

        Ok(ship)
    }

    fn save(&self, ship: Ship) -> StoreResult<Ship> {
        let mut collection = self.write()?;

        let slot = collection
            .ships
            .get_mut(&ship.id)
            .ok_or(StoreError::Missing(ship.id))?;
        *slot = ship.clone();

        Ok(ship)
    }

    fn delete(&self, id: ShipId) -> StoreResult<bool> {
        Ok(self.write()?.ships.remove(&id).is_some())
    }

    fn query_by_predicate(
        &self,
        filter: &ShipFilter,
        request: &PageRequest,
    ) -> StoreResult<Page<Ship>> {
        let collection = self.read()?;
        Ok(QueryExecutor::list(collection.ships.values(), filter, request))
    }

    fn count_by_predicate(&self, filter: &ShipFilter) -> StoreResult<usize> {
        let collection = self.read()?;
        Ok(QueryExecutor::count(collection.ships.values(), filter))
    }
}
