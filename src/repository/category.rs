use crate::domain::category::Category;
use crate::repository::{CategoryReader, InMemoryRepository, RepositoryResult};

impl CategoryReader for InMemoryRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.to_vec())
    }

    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }
}
