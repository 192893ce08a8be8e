//! Listing filters and sort keys backing the product browse page.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    ALL_CATEGORIES, ALL_STATES, Predicate, Predicates, SearchTerm, filter_sorted,
};
use crate::domain::product::Product;
use crate::domain::types::Grade;

/// Category dimension of a [`CatalogQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match against the canonical category name.
    Only(String),
}

impl CategoryFilter {
    /// Interprets a form value; the sentinel or an empty value means `All`.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Slug carried in the `category` URL parameter, if any.
    pub fn to_param(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Only(name) => Some(name.to_lowercase().replace(' ', "-")),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(name) => name,
        }
    }
}

impl Predicate<Product> for CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => product.category.as_str() == name,
        }
    }
}

/// State dimension shared by listing and seller queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_STATES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub(crate) fn matches_state(&self, state: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == state,
        }
    }
}

impl Predicate<Product> for RegionFilter {
    fn matches(&self, product: &Product) -> bool {
        self.matches_state(&product.location.state)
    }
}

impl Predicate<Product> for SearchTerm {
    fn matches(&self, product: &Product) -> bool {
        self.matches_name(&product.name)
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PriceRange {
    min: f64,
    max: f64,
}

impl Predicate<Product> for PriceRange {
    fn matches(&self, product: &Product) -> bool {
        let price = product.price.get();
        self.min <= price && price <= self.max
    }
}

#[derive(Debug, Clone, Copy)]
struct OrganicOnly(bool);

impl Predicate<Product> for OrganicOnly {
    fn matches(&self, product: &Product) -> bool {
        !self.0 || product.quality.organic
    }
}

#[derive(Debug, Clone, Copy)]
struct CertifiedOnly(bool);

impl Predicate<Product> for CertifiedOnly {
    fn matches(&self, product: &Product) -> bool {
        !self.0 || product.quality.certified
    }
}

#[derive(Debug, Clone, Copy)]
struct GradeIs(Option<Grade>);

impl Predicate<Product> for GradeIs {
    fn matches(&self, product: &Product) -> bool {
        self.0.is_none_or(|grade| product.quality.grade == grade)
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveOnly(bool);

impl Predicate<Product> for ActiveOnly {
    fn matches(&self, product: &Product) -> bool {
        !self.0 || product.is_active()
    }
}

/// Ordering applied to the filtered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest `created_at` first.
    #[default]
    Latest,
    PriceAscending,
    PriceDescending,
    /// Highest embedded seller rating first.
    SellerRatingDescending,
}

impl SortKey {
    /// Parses a sort selector. Unknown values fall back to [`SortKey::Latest`].
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "price-ascending" | "price-low" => Self::PriceAscending,
            "price-descending" | "price-high" => Self::PriceDescending,
            "seller-rating-descending" | "rating" => Self::SellerRatingDescending,
            _ => Self::Latest,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::PriceAscending => "price-ascending",
            Self::PriceDescending => "price-descending",
            Self::SellerRatingDescending => "seller-rating-descending",
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Latest => b.created_at.cmp(&a.created_at),
            Self::PriceAscending => a.price.get().total_cmp(&b.price.get()),
            Self::PriceDescending => b.price.get().total_cmp(&a.price.get()),
            Self::SellerRatingDescending => {
                b.seller.rating.get().total_cmp(&a.seller.rating.get())
            }
        }
    }
}

/// Browse parameters for the listing catalog.
///
/// The default query has no term, both sentinels, bounds of `[0, +inf]`,
/// no quality flags, hides non-active listings and sorts newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub term: String,
    pub category: CategoryFilter,
    pub region: RegionFilter,
    pub min_price: f64,
    pub max_price: f64,
    pub organic_only: bool,
    pub certified_only: bool,
    pub grade: Option<Grade>,
    /// Hide sold, expired and pending listings.
    pub active_only: bool,
    pub sort: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: CategoryFilter::All,
            region: RegionFilter::All,
            min_price: 0.0,
            max_price: f64::INFINITY,
            organic_only: false,
            certified_only: false,
            grade: None,
            active_only: true,
            sort: SortKey::Latest,
        }
    }
}

impl CatalogQuery {
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }
    pub fn region(mut self, region: RegionFilter) -> Self {
        self.region = region;
        self
    }
    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = min_price;
        self
    }
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }
    pub fn organic_only(mut self, organic_only: bool) -> Self {
        self.organic_only = organic_only;
        self
    }
    pub fn certified_only(mut self, certified_only: bool) -> Self {
        self.certified_only = certified_only;
        self
    }
    pub fn grade(mut self, grade: Option<Grade>) -> Self {
        self.grade = grade;
        self
    }
    pub fn active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Predicates for this query, one per filter dimension.
    pub fn predicates(&self) -> Predicates<'_, Product> {
        vec![
            Box::new(SearchTerm::new(&self.term)),
            Box::new(self.category.clone()),
            Box::new(self.region.clone()),
            Box::new(PriceRange {
                min: self.min_price,
                max: self.max_price,
            }),
            Box::new(OrganicOnly(self.organic_only)),
            Box::new(CertifiedOnly(self.certified_only)),
            Box::new(GradeIs(self.grade)),
            Box::new(ActiveOnly(self.active_only)),
        ]
    }

    /// True when no buyer-facing filter narrows the catalog.
    ///
    /// Sort order and the status policy do not count as filters.
    pub fn is_unfiltered(&self) -> bool {
        self.term.is_empty()
            && self.category == CategoryFilter::All
            && self.region == RegionFilter::All
            && self.min_price <= 0.0
            && self.max_price == f64::INFINITY
            && !self.organic_only
            && !self.certified_only
            && self.grade.is_none()
    }
}

/// Returns the listings matching `query`, ordered by its sort key.
pub fn query<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let sort = query.sort;
    filter_sorted(products, &query.predicates(), |a, b| sort.compare(a, b))
}
