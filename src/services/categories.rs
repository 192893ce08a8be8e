use crate::domain::category::Category;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Returns the category taxonomy in stored order.
///
/// Product counts are the cached values from the seed.
pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::{FailingRepository, sample_category};
    use crate::repository::{CatalogSeed, InMemoryRepository};

    #[test]
    fn lists_categories_with_cached_counts() {
        let mut crops = sample_category("Crops");
        crops.product_count = 2450;
        let repo = InMemoryRepository::new(CatalogSeed {
            categories: vec![crops, sample_category("Seeds")],
            ..Default::default()
        });

        let categories = show_categories(&repo).unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].slug, "crops");
        assert_eq!(categories[0].product_count, 2450);
    }

    #[test]
    fn repository_failure_is_internal() {
        assert_eq!(
            show_categories(&FailingRepository).unwrap_err(),
            ServiceError::Internal
        );
    }
}
