use serde::Deserialize;

use crate::catalog::{DistrictFilter, RegionFilter, SellerQuery, SellerSortKey};

/// Query-string parameters of the seller directory endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseSellersForm {
    pub search: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    /// Comma-separated category names, e.g. `Crops,Seeds`.
    pub categories: Option<String>,
    pub verified: Option<bool>,
    pub sort: Option<String>,
}

impl From<BrowseSellersForm> for SellerQuery {
    fn from(form: BrowseSellersForm) -> Self {
        let categories = form
            .categories
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            term: form.search.unwrap_or_default().trim().to_string(),
            region: RegionFilter::from_value(form.state.as_deref().unwrap_or_default()),
            district: DistrictFilter::from_value(form.district.as_deref().unwrap_or_default()),
            categories,
            verified_only: form.verified.unwrap_or(false),
            sort: form
                .sort
                .as_deref()
                .map(SellerSortKey::from_param)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_categories() {
        let form = BrowseSellersForm {
            categories: Some("Crops, Seeds,,".into()),
            district: Some("All Districts".into()),
            sort: Some("products".into()),
            ..Default::default()
        };

        let query = SellerQuery::from(form);

        assert_eq!(query.categories, vec!["Crops", "Seeds"]);
        assert_eq!(query.district, DistrictFilter::All);
        assert_eq!(query.sort, SellerSortKey::Products);
    }

    #[test]
    fn empty_form_is_the_default_query() {
        assert_eq!(SellerQuery::from(BrowseSellersForm::default()), SellerQuery::default());
    }
}
