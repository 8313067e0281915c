/// Page-keyed paging primitives
///
/// Remote search results are requested one page at a time, keyed by a
/// monotonically increasing page number that starts at 1.
use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};

/// First page number accepted by the media API
pub const STARTING_PAGE_INDEX: u32 = 1;

/// Page sizes used by the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Items requested per page once the list is populated
    pub page_size: u32,
    /// Items requested by the first load of a fresh list
    pub initial_load_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            initial_load_size: 40,
        }
    }
}

impl PagingConfig {
    pub fn new(page_size: u32, initial_load_size: u32) -> Self {
        Self {
            page_size,
            initial_load_size: initial_load_size.max(page_size),
        }
    }

    /// Load size for a request; the first load of a list is larger
    pub fn load_size(&self, is_initial: bool) -> u32 {
        if is_initial {
            self.initial_load_size
        } else {
            self.page_size
        }
    }
}

/// Parameters for a single page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams {
    /// Page to load; `None` means "start from the beginning"
    pub key: Option<u32>,
    pub load_size: u32,
}

impl LoadParams {
    pub fn new(key: Option<u32>, load_size: u32) -> Self {
        Self { key, load_size }
    }
}

/// One loaded page together with the keys of its neighbours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub prev_key: Option<u32>,
    pub next_key: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, prev_key: Option<u32>, next_key: Option<u32>) -> Self {
        Self {
            data,
            prev_key,
            next_key,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Outcome of a page load; errors are values so the pager can keep what it already has
#[derive(Debug)]
pub enum LoadResult<T> {
    Page(Page<T>),
    Error(AppError),
}

/// Snapshot of loaded pages plus the position the user is looking at
#[derive(Debug)]
pub struct PagingState<'a, T> {
    pub pages: &'a [Page<T>],
    pub anchor_position: Option<usize>,
}

impl<'a, T> PagingState<'a, T> {
    pub fn new(pages: &'a [Page<T>], anchor_position: Option<usize>) -> Self {
        Self {
            pages,
            anchor_position,
        }
    }

    /// Page containing the item at `position` in the flattened list,
    /// clamped to the first/last page when the position is out of range.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&'a Page<T>> {
        let mut remaining = position;
        for page in self.pages {
            if remaining < page.len() {
                return Some(page);
            }
            remaining -= page.len();
        }
        self.pages.last()
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<Page<u32>> {
        vec![
            Page::new(vec![1, 2, 3], None, Some(2)),
            Page::new(vec![4, 5], Some(1), Some(3)),
            Page::new(vec![6], Some(2), None),
        ]
    }

    #[test]
    fn initial_load_is_larger() {
        let config = PagingConfig::default();
        assert_eq!(config.load_size(true), 40);
        assert_eq!(config.load_size(false), 20);
    }

    #[test]
    fn initial_load_never_smaller_than_page() {
        let config = PagingConfig::new(30, 10);
        assert_eq!(config.initial_load_size, 30);
    }

    #[test]
    fn closest_page_finds_containing_page() {
        let pages = pages();
        let state = PagingState::new(&pages, None);
        assert_eq!(state.closest_page_to_position(0).unwrap().data, vec![1, 2, 3]);
        assert_eq!(state.closest_page_to_position(3).unwrap().data, vec![4, 5]);
        assert_eq!(state.closest_page_to_position(5).unwrap().data, vec![6]);
    }

    #[test]
    fn closest_page_clamps_past_the_end() {
        let pages = pages();
        let state = PagingState::new(&pages, None);
        assert_eq!(state.closest_page_to_position(99).unwrap().data, vec![6]);
        assert_eq!(state.item_count(), 6);
    }

    #[test]
    fn closest_page_of_empty_state_is_none() {
        let pages: Vec<Page<u32>> = Vec::new();
        let state = PagingState::new(&pages, Some(0));
        assert!(state.closest_page_to_position(0).is_none());
    }
}
