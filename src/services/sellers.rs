use serde::Serialize;

use crate::catalog::{self, CatalogQuery, SellerQuery};
use crate::domain::product::Product;
use crate::domain::seller::Seller;
use crate::domain::types::SellerId;
use crate::forms::sellers::BrowseSellersForm;
use crate::repository::{ProductReader, SellerReader};

use super::{ServiceError, ServiceResult};

/// Seller page: the canonical record plus the seller's current listings.
#[derive(Debug, Serialize)]
pub struct SellerProfile {
    pub seller: Seller,
    /// Active listings, newest first.
    pub products: Vec<Product>,
}

/// Core business logic for the seller directory.
pub fn browse_sellers<R>(form: BrowseSellersForm, repo: &R) -> ServiceResult<Vec<Seller>>
where
    R: SellerReader,
{
    let query = SellerQuery::from(form);

    let sellers = match repo.list_sellers() {
        Ok(sellers) => sellers,
        Err(e) => {
            log::error!("Failed to list sellers: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(catalog::query_sellers(&sellers, &query)
        .into_iter()
        .cloned()
        .collect())
}

/// Loads a seller and the listings whose embedded snapshot points at them.
///
/// The listings keep their own seller snapshot, which may show an older rating
/// than the seller record returned alongside them.
pub fn show_seller<R>(seller_id: &str, repo: &R) -> ServiceResult<SellerProfile>
where
    R: SellerReader + ProductReader,
{
    let seller_id = match SellerId::new(seller_id) {
        Ok(seller_id) => seller_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let seller = match repo.get_seller_by_id(&seller_id) {
        Ok(Some(seller)) => seller,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get seller {seller_id}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let listings = match repo.list_products_by_seller(&seller_id) {
        Ok(listings) => listings,
        Err(e) => {
            log::error!("Failed to list products of seller {seller_id}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let products = catalog::query(&listings, &CatalogQuery::default())
        .into_iter()
        .cloned()
        .collect();

    Ok(SellerProfile { seller, products })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ProductStatus, SellerRating};
    use crate::repository::test::{FailingRepository, sample_product, sample_seller};
    use crate::repository::{CatalogSeed, InMemoryRepository};
    use chrono::Duration;

    fn repo() -> InMemoryRepository {
        let older = sample_product("1", "Organic Basmati Rice", "Crops", 85.0, "Punjab");
        let mut newer = sample_product("2", "Wheat", "Crops", 30.0, "Punjab");
        newer.created_at += Duration::hours(3);
        let mut sold = sample_product("3", "Barley", "Crops", 20.0, "Punjab");
        sold.status = ProductStatus::Sold;
        let mut foreign = sample_product("4", "Fresh Tomatoes", "Vegetables", 40.0, "Maharashtra");
        foreign.seller.id = "seller2".try_into().unwrap();

        let mut seller = sample_seller("seller1", "Rajesh Kumar", "Punjab", "Amritsar");
        seller.rating = SellerRating::new(4.9).unwrap();
        let mut other = sample_seller("seller2", "Priya Sharma", "Maharashtra", "Nashik");
        other.verified = false;

        InMemoryRepository::new(CatalogSeed {
            products: vec![older, newer, sold, foreign],
            categories: vec![],
            sellers: vec![seller, other],
        })
    }

    #[test]
    fn profile_lists_active_listings_newest_first() {
        let profile = show_seller("seller1", &repo()).unwrap();

        let names: Vec<&str> = profile.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Wheat", "Organic Basmati Rice"]);
        assert_eq!(profile.seller.rating.get(), 4.9);
        assert_eq!(profile.products[0].seller.rating.get(), 4.5);
    }

    #[test]
    fn unknown_seller_is_not_found() {
        assert_eq!(
            show_seller("nobody", &repo()).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn directory_applies_form_filters() {
        let form = BrowseSellersForm {
            verified: Some(true),
            ..Default::default()
        };
        let sellers = browse_sellers(form, &repo()).unwrap();
        assert_eq!(sellers.len(), 1);
        assert_eq!(sellers[0].id, "seller1");
    }

    #[test]
    fn repository_failure_is_internal() {
        let err = browse_sellers(BrowseSellersForm::default(), &FailingRepository).unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }
}
