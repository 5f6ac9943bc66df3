//! Query executor for ship listings
//!
//! Execution flow (strict order):
//! 1. Filter candidates by the composed predicate
//! 2. Sort by the requested field, ties by id
//! 3. Cut the page window
//!
//! `list` and `count` share step 1, so the count always equals the number
//! of ships reachable by walking every page.

use super::filters::ShipFilter;
use super::page::{Page, PageRequest};
use super::sorter::ResultSorter;
use crate::model::Ship;

/// Runs queries over any collection of ships
pub struct QueryExecutor;

impl QueryExecutor {
    /// Returns one sorted page of the ships matching `filter`.
    ///
    /// A page index past the end yields an empty page.
    pub fn list<'a, I>(ships: I, filter: &ShipFilter, request: &PageRequest) -> Page<Ship>
    where
        I: IntoIterator<Item = &'a Ship>,
    {
        let mut matching = Self::matching(ships, filter);
        let total = matching.len();

        ResultSorter::sort(&mut matching, request.order);

        let content: Vec<Ship> = matching
            .into_iter()
            .skip(request.offset())
            .take(request.page_size.get())
            .collect();

        Page::new(content, request, total)
    }

    /// Number of ships matching `filter`
    pub fn count<'a, I>(ships: I, filter: &ShipFilter) -> usize
    where
        I: IntoIterator<Item = &'a Ship>,
    {
        ships.into_iter().filter(|s| filter.matches(s)).count()
    }

    fn matching<'a, I>(ships: I, filter: &ShipFilter) -> Vec<Ship>
    where
        I: IntoIterator<Item = &'a Ship>,
    {
        ships
            .into_iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }
}
