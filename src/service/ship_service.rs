//! Ship service
//!
//! Sequences every mutation as validate → merge → rate → persist. A
//! validation failure returns before the store is touched, so create and
//! edit are all-or-nothing.

use tracing::{debug, info};

use super::errors::{ServiceError, ServiceResult};
use crate::executor::{FilterParams, Page, PageRequest};
use crate::model::{Ship, ShipId, ShipPayload};
use crate::observability::Event;
use crate::rating;
use crate::storage::ShipStore;
use crate::validation::ShipValidator;

/// Parses an external identifier. Never touches a store.
pub fn parse_id(raw: &str) -> ServiceResult<ShipId> {
    Ok(raw.parse::<ShipId>()?)
}

/// Orchestrates ship reads and writes over a store
pub struct ShipService<S: ShipStore> {
    store: S,
}

impl<S: ShipStore> ShipService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates a full payload, rates it, and stores it under a new id.
    pub fn create(&self, payload: &ShipPayload) -> ServiceResult<Ship> {
        let validated = ShipValidator::validate_create(payload)?;

        let rating = rating::calculate(validated.speed, validated.prod_year(), validated.is_used);
        let ship = self.store.insert(validated.with_rating(rating))?;

        info!(event = %Event::ShipCreated, id = %ship.id, rating = ship.rating);
        Ok(ship)
    }

    /// Overlays the present payload fields onto a stored ship and re-rates it.
    pub fn edit(&self, id: ShipId, payload: &ShipPayload) -> ServiceResult<Ship> {
        let mut ship = self
            .store
            .find_by_id(id)?
            .ok_or(ServiceError::NotFound(id))?;

        let changes = ShipValidator::validate_update(payload)?;
        if changes.is_empty() {
            debug!(id = %id, "edit carries no fields");
        }

        changes.apply_to(&mut ship);
        ship.rating = rating::of(&ship);

        let ship = self.store.save(ship)?;

        info!(event = %Event::ShipUpdated, id = %ship.id, rating = ship.rating);
        Ok(ship)
    }

    pub fn delete(&self, id: ShipId) -> ServiceResult<()> {
        if !self.store.exists_by_id(id)? {
            return Err(ServiceError::NotFound(id));
        }

        if !self.store.delete(id)? {
            return Err(ServiceError::NotFound(id));
        }

        info!(event = %Event::ShipDeleted, id = %id);
        Ok(())
    }

    pub fn get(&self, id: ShipId) -> ServiceResult<Ship> {
        self.store
            .find_by_id(id)?
            .ok_or(ServiceError::NotFound(id))
    }

    /// One sorted page of the ships matching `params`
    pub fn list(&self, params: &FilterParams, request: &PageRequest) -> ServiceResult<Page<Ship>> {
        let filter = params.to_filter();
        let page = self.store.query_by_predicate(&filter, request)?;

        debug!(
            event = %Event::QueryExecuted,
            fragments = filter.fragments().len(),
            order = %request.order,
            page = request.page_number,
            returned = page.len(),
            total = page.total_elements,
        );
        Ok(page)
    }

    /// Number of ships matching `params`
    pub fn count(&self, params: &FilterParams) -> ServiceResult<usize> {
        let filter = params.to_filter();
        let count = self.store.count_by_predicate(&filter)?;

        debug!(
            event = %Event::QueryExecuted,
            fragments = filter.fragments().len(),
            total = count,
        );
        Ok(count)
    }
}
