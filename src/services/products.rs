use serde::Serialize;

use crate::catalog::{self, CategoryFilter, SortKey};
use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::forms::products::{BrowseProductsForm, BrowseProductsPayload};
use crate::models::config::ServerConfig;
use crate::pagination::Paginated;
use crate::repository::{CategoryReader, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Browse result handed to the presentation layer.
#[derive(Debug, Serialize)]
pub struct ProductBrowse {
    #[serde(flatten)]
    pub page: Paginated<Product>,
    /// False when no filter narrowed the catalog, so an empty page means the
    /// catalog itself is empty rather than "nothing matched".
    pub filtered: bool,
    /// Slug to keep in the `category` URL parameter.
    pub category: Option<String>,
    pub sort: SortKey,
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps a `category` parameter to a category filter.
///
/// Links carry the lowercase slug, so the taxonomy is consulted first. Values
/// that match no slug get their first letter upper-cased, which is how older
/// links were interpreted.
pub fn resolve_category<R>(raw: &str, repo: &R) -> ServiceResult<CategoryFilter>
where
    R: CategoryReader,
{
    let filter = CategoryFilter::from_value(raw);
    let CategoryFilter::Only(value) = &filter else {
        return Ok(filter);
    };

    let slug = value.to_lowercase().replace(' ', "-");
    match repo.get_category_by_slug(&slug) {
        Ok(Some(category)) => Ok(CategoryFilter::Only(category.name.into_inner())),
        Ok(None) => Ok(CategoryFilter::Only(capitalize_first(value))),
        Err(e) => {
            log::error!("Failed to look up category '{slug}': {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the listing browse page.
///
/// Validates the form, resolves the category parameter, runs the catalog query
/// over a snapshot of the listings and paginates the ordered result. Inverted
/// price bounds are not an error; they simply match nothing.
pub fn browse_products<R>(
    form: BrowseProductsForm,
    config: &ServerConfig,
    repo: &R,
) -> ServiceResult<ProductBrowse>
where
    R: ProductReader + CategoryReader,
{
    let payload = BrowseProductsPayload::try_from(form)?;

    let category = match payload.category.as_deref() {
        Some(raw) => resolve_category(raw, repo)?,
        None => CategoryFilter::All,
    };
    let query = payload
        .query
        .category(category)
        .active_only(!config.include_inactive);

    let products = match repo.list_products() {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let matched: Vec<Product> = catalog::query(&products, &query)
        .into_iter()
        .cloned()
        .collect();
    log::debug!(
        "Catalog query matched {} of {} listings",
        matched.len(),
        products.len()
    );

    Ok(ProductBrowse {
        page: Paginated::from_items(matched, payload.page, config.per_page(payload.per_page)),
        filtered: !query.is_unfiltered(),
        category: query.category.to_param(),
        sort: query.sort,
    })
}

/// Returns a listing for its detail page and counts the view.
pub fn show_product<R>(product_id: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.record_view(&product_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to record view for product {product_id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.get_product_by_id(&product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Counts a buyer inquiry against a listing and returns the updated listing.
pub fn send_inquiry<R>(product_id: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.record_inquiry(&product_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to record inquiry for product {product_id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.get_product_by_id(&product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
