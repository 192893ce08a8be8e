use crate::domain::seller::Seller;
use crate::domain::types::SellerId;
use crate::repository::{InMemoryRepository, RepositoryResult, SellerReader};

impl SellerReader for InMemoryRepository {
    fn list_sellers(&self) -> RepositoryResult<Vec<Seller>> {
        Ok(self.sellers.to_vec())
    }

    fn get_seller_by_id(&self, id: &SellerId) -> RepositoryResult<Option<Seller>> {
        Ok(self.sellers.iter().find(|s| &s.id == id).cloned())
    }
}
