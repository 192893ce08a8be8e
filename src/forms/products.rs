use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::catalog::{CatalogQuery, RegionFilter, SortKey};
use crate::domain::types::{Grade, TypeConstraintError};

/// Query-string parameters of the listing browse endpoint.
///
/// Every field is optional; an absent field leaves that filter off.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BrowseProductsForm {
    pub search: Option<String>,
    /// Category name or URL slug.
    pub category: Option<String>,
    pub state: Option<String>,
    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    pub organic: Option<bool>,
    pub certified: Option<bool>,
    pub grade: Option<String>,
    pub sort: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1))]
    pub per_page: Option<usize>,
}

/// Validated browse request.
///
/// The category stays raw: resolving a slug needs the category taxonomy,
/// which the service owns.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseProductsPayload {
    pub query: CatalogQuery,
    pub category: Option<String>,
    pub page: usize,
    pub per_page: Option<usize>,
}

#[derive(Debug, Error)]
pub enum BrowseProductsFormError {
    #[error("Browse form validation failed: {0}")]
    Validation(String),
    #[error("Browse form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for BrowseProductsFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for BrowseProductsFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn price_bound(
    value: Option<f64>,
    field: &'static str,
) -> Result<Option<f64>, TypeConstraintError> {
    match value {
        Some(v) if v.is_nan() => Err(TypeConstraintError::InvalidValue(format!(
            "{field} must be a number"
        ))),
        other => Ok(other),
    }
}

impl TryFrom<BrowseProductsForm> for BrowseProductsPayload {
    type Error = BrowseProductsFormError;

    fn try_from(form: BrowseProductsForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let defaults = CatalogQuery::default();
        let min_price = price_bound(form.min_price, "min_price")?.unwrap_or(defaults.min_price);
        let max_price = price_bound(form.max_price, "max_price")?.unwrap_or(defaults.max_price);
        let grade = form
            .grade
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(Grade::try_from)
            .transpose()?;

        let query = defaults
            .term(form.search.unwrap_or_default().trim())
            .region(RegionFilter::from_value(form.state.as_deref().unwrap_or_default()))
            .min_price(min_price)
            .max_price(max_price)
            .organic_only(form.organic.unwrap_or(false))
            .certified_only(form.certified.unwrap_or(false))
            .grade(grade)
            .sort(form.sort.as_deref().map(SortKey::from_param).unwrap_or_default());

        Ok(Self {
            query,
            category: form.category,
            page: form.page.unwrap_or(1),
            per_page: form.per_page,
        })
    }
}
