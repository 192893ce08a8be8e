//! Seller directory filters, reusing the listing predicate machinery.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    ALL_DISTRICTS, Predicate, Predicates, RegionFilter, SearchTerm, filter_sorted,
};
use crate::domain::seller::Seller;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DistrictFilter {
    #[default]
    All,
    Only(String),
}

impl DistrictFilter {
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_DISTRICTS {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl Predicate<Seller> for DistrictFilter {
    fn matches(&self, seller: &Seller) -> bool {
        match self {
            Self::All => true,
            Self::Only(district) => seller.location.district == *district,
        }
    }
}

impl Predicate<Seller> for RegionFilter {
    fn matches(&self, seller: &Seller) -> bool {
        self.matches_state(&seller.location.state)
    }
}

impl Predicate<Seller> for SearchTerm {
    fn matches(&self, seller: &Seller) -> bool {
        self.matches_name(&seller.name)
    }
}

/// Passes sellers specialising in at least one of the selected categories.
struct TradesAny<'q>(&'q [String]);

impl Predicate<Seller> for TradesAny<'_> {
    fn matches(&self, seller: &Seller) -> bool {
        self.0.is_empty()
            || seller
                .specialization
                .iter()
                .any(|category| self.0.iter().any(|wanted| wanted == category.as_str()))
    }
}

struct VerifiedOnly(bool);

impl Predicate<Seller> for VerifiedOnly {
    fn matches(&self, seller: &Seller) -> bool {
        !self.0 || seller.verified
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SellerSortKey {
    /// Highest rating first.
    #[default]
    Rating,
    /// Most reviews first.
    Reviews,
    /// Most listed products first.
    Products,
    /// Alphabetical, ignoring case.
    Name,
}

impl SellerSortKey {
    /// Parses a sort selector. Unknown values fall back to [`SellerSortKey::Rating`].
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "reviews" => Self::Reviews,
            "products" => Self::Products,
            "name" => Self::Name,
            _ => Self::Rating,
        }
    }

    pub fn compare(self, a: &Seller, b: &Seller) -> Ordering {
        match self {
            Self::Rating => b.rating.get().total_cmp(&a.rating.get()),
            Self::Reviews => b.total_reviews.cmp(&a.total_reviews),
            Self::Products => b.total_products.cmp(&a.total_products),
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

/// Browse parameters for the seller directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SellerQuery {
    pub term: String,
    pub region: RegionFilter,
    pub district: DistrictFilter,
    /// Category names; empty means any.
    pub categories: Vec<String>,
    pub verified_only: bool,
    pub sort: SellerSortKey,
}

impl SellerQuery {
    pub fn predicates(&self) -> Predicates<'_, Seller> {
        vec![
            Box::new(SearchTerm::new(&self.term)),
            Box::new(self.region.clone()),
            Box::new(self.district.clone()),
            Box::new(TradesAny(&self.categories)),
            Box::new(VerifiedOnly(self.verified_only)),
        ]
    }
}

/// Returns the sellers matching `query`, ordered by its sort key.
pub fn query_sellers<'a>(sellers: &'a [Seller], query: &SellerQuery) -> Vec<&'a Seller> {
    let sort = query.sort;
    filter_sorted(sellers, &query.predicates(), |a, b| sort.compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SellerRating;
    use crate::repository::test::sample_seller;

    fn directory() -> Vec<Seller> {
        let mut rajesh = sample_seller("1", "Rajesh Kumar", "Punjab", "Amritsar");
        rajesh.specialization = vec!["Crops".try_into().unwrap()];
        rajesh.total_reviews = 89;
        rajesh.total_products = 24;

        let mut priya = sample_seller("2", "priya sharma", "Maharashtra", "Nashik");
        priya.rating = SellerRating::new(4.6).unwrap();
        priya.verified = false;
        priya.specialization = vec!["Vegetables".try_into().unwrap()];
        priya.total_reviews = 120;
        priya.total_products = 18;

        let mut amit = sample_seller("3", "Amit Singh", "Maharashtra", "Pune");
        amit.rating = SellerRating::new(4.9).unwrap();
        amit.specialization = vec![
            "Tools".try_into().unwrap(),
            "Vegetables".try_into().unwrap(),
        ];
        amit.total_reviews = 45;
        amit.total_products = 31;

        vec![rajesh, priya, amit]
    }

    fn ids(result: &[&Seller]) -> Vec<String> {
        result.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn default_sort_is_rating_descending() {
        let sellers = directory();
        let result = query_sellers(&sellers, &SellerQuery::default());
        assert_eq!(ids(&result), vec!["3", "1", "2"]);
    }

    #[test]
    fn state_and_district_narrow_results() {
        let sellers = directory();
        let q = SellerQuery {
            region: RegionFilter::from_value("Maharashtra"),
            district: DistrictFilter::from_value("Pune"),
            ..Default::default()
        };
        assert_eq!(ids(&query_sellers(&sellers, &q)), vec!["3"]);
    }

    #[test]
    fn categories_match_any_specialization() {
        let sellers = directory();
        let q = SellerQuery {
            categories: vec!["Vegetables".into(), "Seeds".into()],
            sort: SellerSortKey::Reviews,
            ..Default::default()
        };
        assert_eq!(ids(&query_sellers(&sellers, &q)), vec!["2", "3"]);
    }

    #[test]
    fn verified_only_drops_unverified() {
        let sellers = directory();
        let q = SellerQuery {
            verified_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&query_sellers(&sellers, &q)), vec!["3", "1"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let sellers = directory();
        let q = SellerQuery {
            sort: SellerSortKey::from_param("name"),
            ..Default::default()
        };
        assert_eq!(ids(&query_sellers(&sellers, &q)), vec!["3", "2", "1"]);
    }

    #[test]
    fn term_matches_seller_name() {
        let sellers = directory();
        let q = SellerQuery {
            term: "SHARMA".into(),
            ..Default::default()
        };
        assert_eq!(ids(&query_sellers(&sellers, &q)), vec!["2"]);
    }
}
