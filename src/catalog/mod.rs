//! In-memory catalog query engine.
//!
//! A query is a list of independent [`Predicate`]s combined with AND, followed
//! by a stable sort on a single key. Nothing here performs I/O or keeps state
//! between calls, so the same inputs always give the same ordered output and
//! the functions can be called from any number of threads at once.

use std::cmp::Ordering;

pub mod products;
pub mod sellers;

pub use products::{CatalogQuery, CategoryFilter, RegionFilter, SortKey, query};
pub use sellers::{DistrictFilter, SellerQuery, SellerSortKey, query_sellers};

/// Sentinel meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "All Categories";
/// Sentinel meaning "do not filter by state".
pub const ALL_STATES: &str = "All States";
/// Sentinel meaning "do not filter by district".
pub const ALL_DISTRICTS: &str = "All Districts";

/// Boolean test deciding whether a single record is kept.
pub trait Predicate<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Boxed predicates evaluated in order; a record must pass all of them.
pub type Predicates<'q, T> = Vec<Box<dyn Predicate<T> + 'q>>;

/// Keeps the records that pass every predicate and sorts the survivors.
///
/// `slice::sort_by` is stable, so records comparing equal keep the order they
/// had in `items`.
pub fn filter_sorted<'a, T, C>(
    items: &'a [T],
    predicates: &[Box<dyn Predicate<T> + '_>],
    compare: C,
) -> Vec<&'a T>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut matched: Vec<&T> = items
        .iter()
        .filter(|item| predicates.iter().all(|p| p.matches(item)))
        .collect();
    matched.sort_by(|a, b| compare(a, b));
    matched
}

/// Case-insensitive substring test on a record's display name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn matches_name(&self, name: &str) -> bool {
        self.0.is_empty() || name.to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Predicate<i32> for Even {
        fn matches(&self, item: &i32) -> bool {
            item % 2 == 0
        }
    }

    struct Below(i32);

    impl Predicate<i32> for Below {
        fn matches(&self, item: &i32) -> bool {
            *item < self.0
        }
    }

    #[test]
    fn predicates_are_conjunctive() {
        let items = [1, 2, 3, 4, 6, 8];
        let predicates: Predicates<'_, i32> = vec![Box::new(Even), Box::new(Below(7))];

        let result = filter_sorted(&items, &predicates, |a, b| b.cmp(a));

        assert_eq!(result, vec![&6, &4, &2]);
    }

    #[test]
    fn empty_predicate_list_keeps_everything() {
        let items = [3, 1, 2];
        let result = filter_sorted(&items, &[], |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(result, vec![&1, &2, &3]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let items = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let result = filter_sorted(&items, &[], |a: &(i32, char), b| a.0.cmp(&b.0));
        let order: Vec<char> = result.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn search_term_folds_case() {
        let term = SearchTerm::new("TomAto");
        assert!(term.matches_name("Fresh Tomatoes"));
        assert!(!term.matches_name(""));
        assert!(SearchTerm::new("").matches_name(""));
    }
}
