//! Query subsystem for ship listings
//!
//! # Execution Flow (strict order)
//!
//! 1. Build one predicate fragment per present filter parameter
//! 2. Conjoin the fragments (no fragments = match everything)
//! 3. Filter the collection
//! 4. Sort ascending by the requested field, ties by id
//! 5. Cut the requested page window
//!
//! Counting runs steps 1-3 only, over the same predicate.

mod executor;
pub mod filters;
mod page;
mod sorter;

pub use executor::QueryExecutor;
pub use filters::{FilterParams, Fragment, Range, ShipFilter};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use sorter::ResultSorter;
