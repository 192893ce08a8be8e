use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::seller::Seller;
use crate::domain::types::{ProductId, SellerId};

pub mod category;
pub mod errors;
pub mod product;
pub mod seller;

pub use errors::{RepositoryError, RepositoryResult};

/// Everything the marketplace starts with: listings, taxonomy and sellers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
}

impl CatalogSeed {
    /// Parses a seed document. Records violating type constraints are rejected.
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Repository holding the whole catalog in memory.
///
/// Built once at startup and shared by cloning; clones see the same data.
/// Only the listing counters change after construction.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<Vec<Product>>>,
    categories: Arc<[Category]>,
    sellers: Arc<[Seller]>,
}

impl InMemoryRepository {
    pub fn new(seed: CatalogSeed) -> Self {
        Self {
            products: Arc::new(RwLock::new(seed.products)),
            categories: seed.categories.into(),
            sellers: seed.sellers.into(),
        }
    }

    /// Loads a JSON seed file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let seed = CatalogSeed::from_json(&std::fs::read_to_string(path)?)?;
        log::info!(
            "Loaded catalog seed from {}: {} products, {} categories, {} sellers",
            path.display(),
            seed.products.len(),
            seed.categories.len(),
            seed.sellers.len()
        );
        Ok(Self::new(seed))
    }

    fn products(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    fn products_mut(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.products
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)
    }
}

/// Read-only operations for listings.
pub trait ProductReader {
    /// Snapshot of every listing in collection order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a listing by its identifier.
    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
    /// Listings whose embedded seller snapshot has the given id.
    fn list_products_by_seller(&self, seller_id: &SellerId) -> RepositoryResult<Vec<Product>>;
}

/// Counter updates driven by buyer activity.
pub trait ProductWriter {
    /// Increments the view counter. Returns `false` when the listing is unknown.
    fn record_view(&self, id: &ProductId) -> RepositoryResult<bool>;
    /// Increments the inquiry counter. Returns `false` when the listing is unknown.
    fn record_inquiry(&self, id: &ProductId) -> RepositoryResult<bool>;
}

/// Read-only operations for the category taxonomy.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Look a category up by its URL slug.
    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
}

/// Read-only operations for seller records.
pub trait SellerReader {
    fn list_sellers(&self) -> RepositoryResult<Vec<Seller>>;
    fn get_seller_by_id(&self, id: &SellerId) -> RepositoryResult<Option<Seller>>;
}
