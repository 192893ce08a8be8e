use crate::domain::product::Product;
use crate::domain::types::{ProductId, SellerId};
use crate::repository::{InMemoryRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for InMemoryRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products()?.clone())
    }

    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self.products()?.iter().find(|p| &p.id == id).cloned())
    }

    fn list_products_by_seller(&self, seller_id: &SellerId) -> RepositoryResult<Vec<Product>> {
        Ok(self
            .products()?
            .iter()
            .filter(|p| &p.seller.id == seller_id)
            .cloned()
            .collect())
    }
}

impl ProductWriter for InMemoryRepository {
    fn record_view(&self, id: &ProductId) -> RepositoryResult<bool> {
        let mut products = self.products_mut()?;
        Ok(match products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.views = product.views.saturating_add(1);
                true
            }
            None => false,
        })
    }

    fn record_inquiry(&self, id: &ProductId) -> RepositoryResult<bool> {
        let mut products = self.products_mut()?;
        Ok(match products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.inquiries = product.inquiries.saturating_add(1);
                true
            }
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CatalogSeed;
    use crate::repository::test::sample_product;

    fn repo() -> InMemoryRepository {
        let mut other = sample_product("2", "Fresh Tomatoes", "Vegetables", 40.0, "Maharashtra");
        other.seller.id = "seller2".try_into().unwrap();
        InMemoryRepository::new(CatalogSeed {
            products: vec![
                sample_product("1", "Organic Basmati Rice", "Crops", 85.0, "Punjab"),
                other,
            ],
            ..Default::default()
        })
    }

    #[test]
    fn lists_in_collection_order() {
        let ids: Vec<String> = repo()
            .list_products()
            .unwrap()
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn finds_by_id_and_seller() {
        let repo = repo();
        let id = ProductId::new("2").unwrap();
        assert_eq!(repo.get_product_by_id(&id).unwrap().unwrap().name, "Fresh Tomatoes");
        assert!(
            repo.get_product_by_id(&ProductId::new("9").unwrap())
                .unwrap()
                .is_none()
        );

        let seller = SellerId::new("seller2").unwrap();
        assert_eq!(repo.list_products_by_seller(&seller).unwrap().len(), 1);
    }

    #[test]
    fn counters_only_increase_and_are_shared_between_clones() {
        let repo = repo();
        let clone = repo.clone();
        let id = ProductId::new("1").unwrap();

        assert!(repo.record_view(&id).unwrap());
        assert!(clone.record_view(&id).unwrap());
        assert!(repo.record_inquiry(&id).unwrap());

        let product = clone.get_product_by_id(&id).unwrap().unwrap();
        assert_eq!(product.views, 2);
        assert_eq!(product.inquiries, 1);
    }

    #[test]
    fn unknown_listing_is_reported() {
        let missing = ProductId::new("missing").unwrap();
        assert!(!repo().record_view(&missing).unwrap());
        assert!(!repo().record_inquiry(&missing).unwrap());
    }
}
