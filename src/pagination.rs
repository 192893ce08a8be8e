//! Page envelope for browse results.
//!
//! The query engine always returns the complete ordered sequence; slicing it
//! into pages happens here, at the edge.

use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// One page of an ordered result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    pub pages: usize,
    /// Number of items across all pages.
    pub total: usize,
}

impl<T> Paginated<T> {
    /// Slices `items` into the requested page. Pages past the end are empty.
    pub fn from_items(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let total = items.len();
        let items = items
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();
        Self {
            items,
            page,
            pages: total.div_ceil(per_page),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_requested_page() {
        let page = Paginated::from_items((1..=7).collect::<Vec<_>>(), 2, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.pages, 3);
        assert_eq!(page.total, 7);
    }

    #[test]
    fn page_past_end_is_empty() {
        let page = Paginated::from_items(vec![1, 2], 5, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 2);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let page = Paginated::<u8>::from_items(vec![], 1, 20);
        assert_eq!(page.pages, 0);
        assert!(page.items.is_empty());
    }
}
