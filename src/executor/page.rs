//! Pagination types

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::model::ShipOrder;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(size) => size,
    None => unreachable!(),
};

/// Zero-based page index, page size and sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: NonZeroUsize,
    pub order: ShipOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
            order: ShipOrder::default(),
        }
    }
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: NonZeroUsize, order: ShipOrder) -> Self {
        Self {
            page_number,
            page_size,
            order,
        }
    }

    /// Index of the first element of this page; saturates for huge indices
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size.get())
    }
}

/// One window over an ordered, filtered result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: usize) -> Self {
        let page_size = request.page_size.get();
        Self {
            content,
            page_number: request.page_number,
            page_size,
            total_elements,
            total_pages: total_elements.div_ceil(page_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }
}
