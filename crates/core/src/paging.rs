//! Paging primitives shared by services and list models.
//!
//! Admin grids send 1-based page numbers; data access works with 0-based page
//! indexes. [`PageRequest::from_one_based`] is the only place that conversion
//! happens.

use serde::{Deserialize, Serialize};

/// A 0-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page index (0-based).
    pub index: u32,
    /// Page size (always at least 1).
    pub size: u32,
}

impl PageRequest {
    pub fn new(index: u32, size: u32) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    /// Convert a 1-based page number from a grid into a request.
    ///
    /// Page `0` is treated as the first page.
    pub fn from_one_based(page: u32, page_size: u32) -> Self {
        Self::new(page.saturating_sub(1), page_size)
    }

    /// Request everything in a single page.
    pub fn all() -> Self {
        Self::new(0, u32::MAX)
    }

    pub fn offset(&self) -> usize {
        (self.index as usize).saturating_mul(self.size as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::all()
    }
}

/// One page of an ordered collection plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub page_size: u32,
    /// Number of matches across all pages.
    pub total_count: usize,
}

impl<T> PagedList<T> {
    /// Cut the requested page out of an already filtered and ordered source.
    pub fn paginate(source: Vec<T>, page: PageRequest) -> Self {
        let total_count = source.len();
        let items = source
            .into_iter()
            .skip(page.offset())
            .take(page.size as usize)
            .collect();
        Self {
            items,
            page_index: page.index,
            page_size: page.size,
            total_count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
